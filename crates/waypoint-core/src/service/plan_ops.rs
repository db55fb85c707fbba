//! Plan CRUD and cart operations for the TripPlanner.

use tokio::task;

use super::TripPlanner;
use crate::{
    catalog,
    display::PlanSummaries,
    error::{PlannerError, Result},
    models::{Plan, PlanSummary, TravelSpot},
    params::{CartAdd, CartRemove, CreatePlan, Id},
};

impl TripPlanner {
    /// Creates a new plan. Without an explicit title, a numbered
    /// "Trip to somewhere N" default is used.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let title = params.title.clone();

        task::spawn_blocking(move || {
            let mut db = crate::store::Database::new(&db_path)?;
            let title = match title {
                Some(title) => title,
                None => format!("Trip to somewhere {}", db.list_plans()?.len() + 1),
            };
            db.create_plan(&title)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = crate::store::Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all plans as display summaries.
    pub async fn list_plans_summary(&self) -> Result<PlanSummaries> {
        let db_path = self.db_path.clone();

        let plans = task::spawn_blocking(move || {
            let db = crate::store::Database::new(&db_path)?;
            db.list_plans()
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let summaries: Vec<PlanSummary> = plans.iter().map(Into::into).collect();
        Ok(PlanSummaries(summaries))
    }

    /// Permanently deletes a plan. This operation cannot be undone.
    pub async fn delete_plan(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = crate::store::Database::new(&db_path)?;
            db.delete_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Adds a catalog spot to a plan's cart, returning the updated cart.
    pub async fn cart_add(&self, params: &CartAdd) -> Result<Vec<TravelSpot>> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let spot_id = params.spot_id.clone();

        task::spawn_blocking(move || {
            let spot = catalog::spot(&spot_id).ok_or(PlannerError::SpotNotFound {
                id: spot_id.clone(),
            })?;

            let mut db = crate::store::Database::new(&db_path)?;
            let mut cart = db.require_plan(plan_id)?.cart;
            cart.push(spot);
            db.set_cart(plan_id, &cart)?;
            Ok(cart)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a cart entry by position, returning the updated cart.
    pub async fn cart_remove(&self, params: &CartRemove) -> Result<Vec<TravelSpot>> {
        let db_path = self.db_path.clone();
        let plan_id = params.plan_id;
        let index = params.index;

        task::spawn_blocking(move || {
            let mut db = crate::store::Database::new(&db_path)?;
            let mut cart = db.require_plan(plan_id)?.cart;
            if index >= cart.len() {
                return Err(PlannerError::invalid_input(
                    "index",
                    format!("cart has {} entries", cart.len()),
                ));
            }
            cart.remove(index);
            db.set_cart(plan_id, &cart)?;
            Ok(cart)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
