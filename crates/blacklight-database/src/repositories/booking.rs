//! Booking repository implementation.
//!
//! `create_if_free` serialises bookings per room with a row lock on the room;
//! the `bookings_no_overlap` exclusion constraint backs that up at the storage
//! level and surfaces as `SlotConflict`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_core::types::{PageRequest, PageResponse};
use blacklight_entity::booking::{Booking, BookingStatus, NewBooking};
use blacklight_entity::report::BookingTotals;

use crate::error::map_db_error;
use crate::store::BookingStore;

const ACTIVE_FOR_ROOM: &str = r#"SELECT * FROM bookings
    WHERE room_id = $1 AND booking_date = $2 AND status IN ('pending', 'confirmed')
    ORDER BY start_hour"#;

#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to find booking"))
    }

    async fn list(
        &self,
        customer_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings WHERE ($1::uuid IS NULL OR customer_id = $1)",
        )
        .bind(customer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to count bookings"))?;

        let bookings = sqlx::query_as::<_, Booking>(
            r#"SELECT * FROM bookings
               WHERE ($1::uuid IS NULL OR customer_id = $1)
               ORDER BY created_at DESC, id
               LIMIT $2 OFFSET $3"#,
        )
        .bind(customer_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to list bookings"))?;

        Ok(PageResponse::new(bookings, page, total as u64))
    }

    async fn find_active_for_room(
        &self,
        room_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(ACTIVE_FOR_ROOM)
            .bind(room_id)
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load bookings for room"))
    }

    async fn create_if_free(&self, booking: &NewBooking) -> AppResult<Booking> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction"))?;

        let room: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM rooms WHERE id = $1 FOR UPDATE")
                .bind(booking.room_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| map_db_error(e, "Failed to lock room"))?;
        if room.is_none() {
            return Err(AppError::not_found(format!(
                "Room {} not found",
                booking.room_id
            )));
        }

        let active = sqlx::query_as::<_, Booking>(ACTIVE_FOR_ROOM)
            .bind(booking.room_id)
            .bind(booking.booking_date)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| map_db_error(e, "Failed to load bookings for room"))?;

        if let Some(existing) = active.iter().find(|b| b.blocks(&booking.window)) {
            debug!(
                room_id = %booking.room_id,
                requested = %booking.window,
                existing = %existing.window(),
                "Booking overlaps an active booking"
            );
            return Err(AppError::slot_conflict(format!(
                "{} on {} overlaps an existing booking ({})",
                booking.window,
                booking.booking_date,
                existing.window()
            )));
        }

        let created = sqlx::query_as::<_, Booking>(
            r#"INSERT INTO bookings
                   (id, room_id, customer_id, booking_date, start_hour, duration_hours,
                    total_price, deposit_amount, status, payment_status)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending', 'unpaid')
               RETURNING *"#,
        )
        .bind(Uuid::new_v4())
        .bind(booking.room_id)
        .bind(booking.customer_id)
        .bind(booking.booking_date)
        .bind(booking.window.start)
        .bind(booking.window.duration())
        .bind(booking.total_price)
        .bind(booking.deposit_amount)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to insert booking"))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit booking"))?;
        Ok(created)
    }

    async fn update_status(&self, id: Uuid, next: BookingStatus) -> AppResult<Booking> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction"))?;

        let current = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_db_error(e, "Failed to lock booking"))?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;

        if !current.status.can_transition_to(next) {
            return Err(AppError::invalid_status_transition(current.status, next));
        }

        let updated = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(next)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to update booking status"))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit booking status"))?;
        Ok(updated)
    }

    async fn mark_paid(&self, id: Uuid) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            r#"UPDATE bookings SET
                   updated_at = CASE WHEN payment_status = 'paid' THEN updated_at ELSE NOW() END,
                   payment_status = 'paid'
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to mark booking paid"))?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    async fn totals(&self, day: NaiveDate) -> AppResult<BookingTotals> {
        sqlx::query_as::<_, BookingTotals>(
            r#"SELECT
                   COALESCE(SUM(total_price) FILTER (
                       WHERE status NOT IN ('pending', 'rejected')), 0)::numeric AS settled_revenue,
                   COALESCE(SUM(total_price) FILTER (
                       WHERE booking_date = $1 AND status <> 'rejected'), 0)::numeric AS revenue_on_day,
                   COUNT(*) FILTER (WHERE status = 'confirmed') AS confirmed,
                   COUNT(*) FILTER (WHERE status = 'pending') AS pending
               FROM bookings"#,
        )
        .bind(day)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to total bookings"))
    }
}
