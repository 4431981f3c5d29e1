//! Repository for the `flights` table and its crew assignments.
//!
//! Availability is computed in the same query that lists flights
//! (`capacity - COUNT(tickets)`), so it always reflects committed bookings.

use airport_core::flight_search::FlightSearch;
use airport_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::flight::{CreateFlight, Flight, FlightSeatLayoutRow, FlightSummaryRow};

/// Column list for `flights` queries.
const COLUMNS: &str = "id, route_id, airplane_id, departure_time, arrival_time";

/// Select list producing [`FlightSummaryRow`] rows; expects `flights f`.
const SUMMARY_SELECT: &str = "\
    SELECT f.id, src.name AS route_source, dst.name AS route_destination, \
           f.departure_time, f.arrival_time, a.rows, a.seats_in_row, \
           (SELECT COUNT(*) FROM tickets t WHERE t.flight_id = f.id) AS tickets_booked \
    FROM flights f \
    JOIN routes r ON r.id = f.route_id \
    JOIN airports src ON src.id = r.source_id \
    JOIN airports dst ON dst.id = r.destination_id \
    JOIN airplanes a ON a.id = f.airplane_id";

/// Provides data access for flights.
pub struct FlightRepo;

impl FlightRepo {
    /// Insert a flight and its crew assignments in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateFlight) -> Result<Flight, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO flights (route_id, airplane_id, departure_time, arrival_time)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let flight = sqlx::query_as::<_, Flight>(&query)
            .bind(input.route)
            .bind(input.airplane)
            .bind(input.departure_time)
            .bind(input.arrival_time)
            .fetch_one(&mut *tx)
            .await?;

        Self::assign_crew(&mut *tx, flight.id, &input.crew).await?;

        tx.commit().await?;
        Ok(flight)
    }

    /// Lock one flight row for the rest of the transaction.
    ///
    /// Takes the same row lock as [`Self::lock_seat_layouts`], so an update
    /// and an order on the same flight run one after the other. Returns
    /// `false` if the flight does not exist.
    pub async fn lock(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let locked =
            sqlx::query_scalar::<_, DbId>("SELECT id FROM flights WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(conn)
                .await?;
        Ok(locked.is_some())
    }

    /// Replace every field of a flight, including its crew set.
    ///
    /// Runs on the caller's transaction; see
    /// [`crate::booking::update_flight`]. Returns `None` if the flight does
    /// not exist.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &CreateFlight,
    ) -> Result<Option<Flight>, sqlx::Error> {
        let query = format!(
            "UPDATE flights SET
                route_id = $2,
                airplane_id = $3,
                departure_time = $4,
                arrival_time = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(flight) = sqlx::query_as::<_, Flight>(&query)
            .bind(id)
            .bind(input.route)
            .bind(input.airplane)
            .bind(input.departure_time)
            .bind(input.arrival_time)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM flight_crews WHERE flight_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Self::assign_crew(conn, id, &input.crew).await?;

        Ok(Some(flight))
    }

    async fn assign_crew(
        conn: &mut PgConnection,
        flight_id: DbId,
        crew: &[DbId],
    ) -> Result<(), sqlx::Error> {
        if crew.is_empty() {
            return Ok(());
        }
        sqlx::query(
            "INSERT INTO flight_crews (flight_id, crew_id)
             SELECT $1, UNNEST($2::BIGINT[])
             ON CONFLICT DO NOTHING",
        )
        .bind(flight_id)
        .bind(crew)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Delete a flight by ID. Its crew links and tickets cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a flight by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Flight>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flights WHERE id = $1");
        sqlx::query_as::<_, Flight>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Crew ids assigned to a flight, ascending.
    pub async fn crew_ids(pool: &PgPool, flight_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT crew_id FROM flight_crews WHERE flight_id = $1 ORDER BY crew_id",
        )
        .bind(flight_id)
        .fetch_all(pool)
        .await
    }

    /// Search flights, most recent departure first.
    ///
    /// Every filter in `search` is optional; supplied filters are ANDed.
    /// Airport-name filters are case-insensitive substring matches.
    pub async fn search(
        pool: &PgPool,
        search: &FlightSearch,
    ) -> Result<Vec<FlightSummaryRow>, sqlx::Error> {
        let (window_start, window_end) = search.departure_window().unzip();
        let query = format!(
            "{SUMMARY_SELECT}
             WHERE ($1::TIMESTAMPTZ IS NULL OR f.departure_time >= $1)
               AND ($2::TIMESTAMPTZ IS NULL OR f.departure_time < $2)
               AND ($3::TEXT IS NULL OR src.name ILIKE $3)
               AND ($4::TEXT IS NULL OR dst.name ILIKE $4)
             ORDER BY f.departure_time DESC, f.id DESC"
        );
        sqlx::query_as::<_, FlightSummaryRow>(&query)
            .bind(window_start)
            .bind(window_end)
            .bind(search.departure_pattern())
            .bind(search.arrival_pattern())
            .fetch_all(pool)
            .await
    }

    /// Summary row (names, layout, booked count) for one flight.
    pub async fn find_summary(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FlightSummaryRow>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE f.id = $1");
        sqlx::query_as::<_, FlightSummaryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Lock the given flights for the rest of the transaction and return
    /// their airplane layouts.
    ///
    /// Rows are locked in id order so concurrent orders touching the same
    /// flights cannot deadlock. Unknown ids are simply absent from the result.
    pub async fn lock_seat_layouts(
        conn: &mut PgConnection,
        flight_ids: &[DbId],
    ) -> Result<Vec<FlightSeatLayoutRow>, sqlx::Error> {
        sqlx::query_as::<_, FlightSeatLayoutRow>(
            "SELECT f.id AS flight_id, a.rows, a.seats_in_row
             FROM flights f
             JOIN airplanes a ON a.id = f.airplane_id
             WHERE f.id = ANY($1)
             ORDER BY f.id
             FOR UPDATE OF f",
        )
        .bind(flight_ids)
        .fetch_all(conn)
        .await
    }
}
