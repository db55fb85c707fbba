//! Display implementations for domain models.
//!
//! All output is markdown, rendered rich by the CLI's terminal renderer and
//! printed verbatim in plain mode. Slot tokens (`0-morning-0`) are printed
//! next to every session so users can feed them straight back into the
//! placement and edit commands.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::address::SlotAddress;
use crate::models::{
    ActivityItem, FlightDetails, Period, Plan, PlanSummary, Session, Timetable,
};

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ActivityItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** ({})", self.title, self.location)?;
        if let Some(remarks) = &self.remarks {
            write!(f, " - {remarks}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FlightDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} → {} ({} → {})",
            self.flight_number,
            self.departure_airport,
            self.arrival_airport,
            self.departure_time.strftime("%Y-%m-%d %H:%M"),
            self.arrival_time.strftime("%Y-%m-%d %H:%M"),
        )
    }
}

fn fmt_session(f: &mut fmt::Formatter<'_>, address: SlotAddress, session: &Session) -> fmt::Result {
    writeln!(f, "- `{address}` {}", address.period)?;
    for activity in &session.activities {
        writeln!(f, "  1. {activity}")?;
    }
    Ok(())
}

impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Inbound: {}", self.flights.arrival)?;
        writeln!(f, "- Outbound: {}", self.flights.departure)?;

        for (day_index, day) in self.days.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "### Day {}: {}", day_index + 1, day.date)?;
            writeln!(f)?;
            for period in Period::all() {
                match period {
                    Period::Meal(meal) => {
                        let address = SlotAddress::new(day_index, meal, 0);
                        fmt_session(f, address, day.meal(meal))?;
                    }
                    Period::Flex(flex) => {
                        for (session_index, session) in day.flex(flex).iter().enumerate() {
                            let address = SlotAddress::new(day_index, flex, session_index);
                            fmt_session(f, address, session)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if self.cart.is_empty() {
            writeln!(f, "\nThe cart is empty.")?;
        } else {
            writeln!(f, "\n## Cart")?;
            writeln!(f)?;
            for (index, spot) in self.cart.iter().enumerate() {
                writeln!(f, "{}. **{}**: {}", index, spot.name, spot.description)?;
            }
        }

        match &self.timetable {
            Some(timetable) => {
                writeln!(f, "\n## Itinerary")?;
                writeln!(f)?;
                write!(f, "{timetable}")?;
            }
            None => {
                writeln!(f, "\nNo flights set; the itinerary has not been generated.")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- **Cart**: {} spots", self.cart_size)?;
        if self.day_count > 0 {
            writeln!(
                f,
                "- **Itinerary**: {} days, {} activities",
                self.day_count, self.activity_count
            )?;
        } else {
            writeln!(f, "- **Itinerary**: not scheduled yet")?;
        }
        writeln!(f)?;

        Ok(())
    }
}
