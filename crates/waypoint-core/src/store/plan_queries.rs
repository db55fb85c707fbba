//! Plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Plan, Timetable, TravelSpot},
};

const INSERT_PLAN_SQL: &str =
    "INSERT INTO plans (title, created_at, timetable, cart) VALUES (?1, ?2, NULL, '[]')";
const SELECT_PLAN_SQL: &str =
    "SELECT id, title, created_at, timetable, cart FROM plans WHERE id = ?1";
const LIST_PLANS_SQL: &str =
    "SELECT id, title, created_at, timetable, cart FROM plans ORDER BY id";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";
const UPDATE_TIMETABLE_SQL: &str = "UPDATE plans SET timetable = ?1 WHERE id = ?2";
const UPDATE_CART_SQL: &str = "UPDATE plans SET cart = ?1 WHERE id = ?2";

fn column_error(index: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}

fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<Plan> {
    let created_at_str: String = row.get(2)?;
    let created_at = created_at_str
        .parse::<Timestamp>()
        .map_err(|e| column_error(2, format!("Invalid created_at timestamp: {e}")))?;

    let timetable: Option<Timetable> = match row.get::<_, Option<String>>(3)? {
        Some(json) => Some(
            serde_json::from_str(&json)
                .map_err(|e| column_error(3, format!("Invalid timetable JSON: {e}")))?,
        ),
        None => None,
    };

    let cart_json: String = row.get(4)?;
    let cart: Vec<TravelSpot> = serde_json::from_str(&cart_json)
        .map_err(|e| column_error(4, format!("Invalid cart JSON: {e}")))?;

    Ok(Plan {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        created_at,
        timetable,
        cart,
    })
}

impl super::Database {
    /// Creates a new plan with an empty cart and no timetable.
    pub fn create_plan(&mut self, title: &str) -> Result<Plan> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(INSERT_PLAN_SQL, params![title, &now_str])
            .db_context("Failed to insert plan")?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Plan {
            id,
            title: title.into(),
            created_at: now,
            timetable: None,
            cart: Vec::new(),
        })
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        self.connection
            .query_row(SELECT_PLAN_SQL, params![id as i64], plan_from_row)
            .optional()
            .db_context("Failed to query plan")
    }

    /// Retrieves a plan by its ID, failing when it does not exist.
    pub fn require_plan(&self, id: u64) -> Result<Plan> {
        self.get_plan(id)?.ok_or(PlannerError::PlanNotFound { id })
    }

    /// Lists all plans in creation order.
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        let mut stmt = self
            .connection
            .prepare(LIST_PLANS_SQL)
            .db_context("Failed to prepare plan listing")?;

        let plans = stmt
            .query_map([], plan_from_row)
            .db_context("Failed to list plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan row")?;

        Ok(plans)
    }

    /// Permanently deletes a plan.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let affected = self
            .connection
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .db_context("Failed to delete plan")?;

        if affected == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }
        Ok(())
    }

    /// Replaces a plan's stored timetable snapshot.
    pub fn set_timetable(&mut self, id: u64, timetable: &Timetable) -> Result<()> {
        let json = serde_json::to_string(timetable)?;
        let affected = self
            .connection
            .execute(UPDATE_TIMETABLE_SQL, params![json, id as i64])
            .db_context("Failed to update timetable")?;

        if affected == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }
        Ok(())
    }

    /// Replaces a plan's cart.
    pub fn set_cart(&mut self, id: u64, cart: &[TravelSpot]) -> Result<()> {
        let json = serde_json::to_string(cart)?;
        let affected = self
            .connection
            .execute(UPDATE_CART_SQL, params![json, id as i64])
            .db_context("Failed to update cart")?;

        if affected == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }
        Ok(())
    }
}
