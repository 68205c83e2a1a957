//! Screen orchestration
//!
//! [`Kiosk`] does the I/O around the pure screen handlers: it fetches the
//! tables a screen needs, feeds user input through the handler, and submits
//! whatever the handler decided.

use chrono::{DateTime, Local};
use seat_client::SeatRepository;
use shared::client::CancelRequest;
use shared::models::TableSnapshot;
use shared::time::{GroupSize, ReservationDuration};

use crate::error::{KioskError, KioskResult};
use crate::face::FaceVerdict;
use crate::screens::{
    CancelPlan, EndScreen, GroupOutcome, GroupSession, PersonalOutcome, PersonalSession,
    UsageScreen,
};

pub struct Kiosk<R: SeatRepository> {
    repository: R,
}

impl<R: SeatRepository> Kiosk<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    async fn tables(&self) -> KioskResult<Vec<TableSnapshot>> {
        let tables = self.repository.fetch_tables().await?;
        tracing::debug!(count = tables.len(), "Fetched tables");
        Ok(tables)
    }

    async fn non_empty_tables(&self) -> KioskResult<Vec<TableSnapshot>> {
        let tables = self.tables().await?;
        if tables.is_empty() {
            return Err(KioskError::NoTables);
        }
        Ok(tables)
    }

    /// Upload a face crop and interpret the answer.
    pub async fn identify(&self, jpeg: Vec<u8>) -> KioskResult<FaceVerdict> {
        let response = self.repository.upload_face(jpeg).await?;
        let verdict = FaceVerdict::from_response(&response);
        match &verdict {
            FaceVerdict::Identified { user_id, is_new } => {
                tracing::info!(user_id = %user_id, is_new, "Face identified");
            }
            other => tracing::warn!(verdict = ?other, "Face not accepted"),
        }
        Ok(verdict)
    }

    pub async fn usage_screen(&self) -> KioskResult<UsageScreen> {
        Ok(UsageScreen::new(&self.tables().await?))
    }

    pub async fn open_personal(&self, user_id: &str) -> KioskResult<PersonalSession> {
        Ok(PersonalSession::new(user_id, &self.non_empty_tables().await?))
    }

    /// Confirm the selected seat for `duration` starting at `now`.
    ///
    /// Tables are fetched again first: the update carries the whole table,
    /// so it must be built from current seats, and the seat must still be
    /// free and allowed by the lock. The session comes back with its
    /// selection intact on a server failure so the user can retry.
    pub async fn submit_personal(
        &self,
        session: PersonalSession,
        duration: ReservationDuration,
        now: DateTime<Local>,
    ) -> (PersonalSession, KioskResult<PersonalOutcome>) {
        let session = if session.selected().is_some() {
            match self.tables().await {
                Ok(fresh) => session.refresh(&fresh),
                Err(e) => return (session, Err(e)),
            }
        } else {
            session
        };

        let (session, outcome) = session.confirm(duration, now.time(), now.timestamp());
        let PersonalOutcome::Submit(request) = &outcome else {
            return (session, Ok(outcome));
        };

        if let Err(e) = self.repository.update_table(request).await {
            tracing::error!(table_id = request.table_id, error = %e, "Personal reservation failed");
            return (session, Err(e.into()));
        }
        crate::audit_log!(
            session.user_id(),
            "reserve_personal",
            format!("table:{}", request.table_id),
            format!("{} minutes", duration.minutes())
        );
        (session, Ok(outcome))
    }

    pub async fn open_group(
        &self,
        group_size: GroupSize,
        duration: ReservationDuration,
        now: DateTime<Local>,
    ) -> KioskResult<GroupSession> {
        let tables = self.non_empty_tables().await?;
        Ok(GroupSession::new(group_size, duration.end_time_after(now.time()), &tables))
    }

    /// Register the member identified as `user_id` on the selected seat.
    ///
    /// Tables are fetched again first so a user already seated anywhere is
    /// caught. The completed draft is posted right away.
    pub async fn register_group_member(
        &self,
        session: GroupSession,
        user_id: &str,
        now: DateTime<Local>,
    ) -> (GroupSession, KioskResult<GroupOutcome>) {
        let fresh = match self.tables().await {
            Ok(tables) => tables,
            Err(e) => return (session, Err(e)),
        };

        let (session, outcome) = session.register(user_id, &fresh, now.timestamp());
        let GroupOutcome::Complete(request) = &outcome else {
            return (session, Ok(outcome));
        };

        if let Err(e) = self.repository.update_table(request).await {
            tracing::error!(table_id = request.table_id, error = %e, "Group reservation failed");
            return (session, Err(e.into()));
        }
        crate::audit_log!(
            user_id,
            "reserve_group",
            format!("table:{}", request.table_id),
            format!("{} members until {}", session.registered(), session.end_time())
        );
        (session, Ok(outcome))
    }

    pub async fn plan_cancel(&self, user_id: &str) -> KioskResult<CancelPlan> {
        let response = self.repository.check_usage(user_id).await?;
        let plan = CancelPlan::from_usage(&response);
        tracing::debug!(user_id, ?plan, "Usage checked");
        Ok(plan)
    }

    pub async fn cancel(&self, request: &CancelRequest) -> KioskResult<()> {
        self.repository.cancel(request).await?;

        let actor = match request {
            CancelRequest::Personal(body) | CancelRequest::GroupSingle(body) => {
                body.user_id.as_deref().unwrap_or("-")
            }
            CancelRequest::GroupAll(_) => "-",
        };
        crate::audit_log!(actor, request.path(), format!("table:{}", request.table_id()));
        Ok(())
    }

    pub async fn open_end_screen(&self) -> KioskResult<EndScreen> {
        Ok(EndScreen::new(&self.tables().await?))
    }
}
