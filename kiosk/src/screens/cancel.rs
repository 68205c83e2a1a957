//! Cancellation by face
//!
//! The usage check tells us what the recognized user currently holds. Only
//! the first entry of the usage list is considered.

use shared::client::{CancelRequest, CancelSeatBody, CancelTableBody, UsageCheckResponse};
use shared::models::TableType;
use shared::seat::table_letter;

/// Button pressed on a cancellation popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelChoice {
    /// Positive button: end my usage, or confirm the manual search
    EndUsage,
    /// End every seat of the group table
    EndAll,
    /// End only my seat of the group table
    EndMine,
    /// The recorded seat is not the one being vacated
    OtherSeat,
    Back,
}

/// What the screen does next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelStep {
    Submit(CancelRequest),
    /// Open the manual end screen
    ManualEnd,
    Home,
    /// Choice does not apply here; keep the popup
    Stay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelPlan {
    /// Server could not resolve the user; show the message and go manual
    Manual { message: String },
    NoUsage,
    Personal { table_id: i64, seat_id: i64 },
    Group { table_id: i64, seat_id: i64 },
    /// Usage type the kiosk does not know
    Unknown(String),
}

impl CancelPlan {
    pub fn from_usage(response: &UsageCheckResponse) -> Self {
        if !response.success {
            return Self::Manual {
                message: response.msg.clone(),
            };
        }
        let Some(entry) = response.usage_list.first() else {
            return Self::NoUsage;
        };

        match entry.kind.as_str() {
            "NONE" => Self::NoUsage,
            kind if kind == TableType::Personal.as_wire() => Self::Personal {
                table_id: entry.table_id,
                seat_id: entry.seat_id,
            },
            kind if kind == TableType::Group.as_wire() => Self::Group {
                table_id: entry.table_id,
                seat_id: entry.seat_id,
            },
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Popup text, if this plan shows one.
    pub fn prompt(&self) -> Option<String> {
        match self {
            Self::Manual { message } if message.is_empty() => None,
            Self::Manual { message } => Some(message.clone()),
            Self::NoUsage => Some(
                "No usage found. Do you want to pick the seat to end yourself?".to_string(),
            ),
            Self::Personal { table_id, seat_id } => Some(format!(
                "You are using seat [{}{}].\n\nEnd your usage?",
                table_letter(*table_id),
                seat_id
            )),
            Self::Group { table_id, .. } => Some(format!(
                "End usage of every seat at table {}?",
                table_letter(*table_id)
            )),
            Self::Unknown(kind) => Some(format!("Error: usage type {kind}")),
        }
    }

    pub fn request(&self, choice: CancelChoice, user_id: &str) -> CancelStep {
        use CancelChoice::*;

        let seat_body = |table_id: i64, seat_id: i64| CancelSeatBody {
            user_id: Some(user_id.to_string()),
            table_id,
            seat_id,
        };

        match (self, choice) {
            (Self::Manual { .. }, _) => CancelStep::ManualEnd,
            (Self::Unknown(_), _) => CancelStep::Home,

            (Self::NoUsage, EndUsage) => CancelStep::ManualEnd,
            (Self::NoUsage, Back) => CancelStep::Home,

            (Self::Personal { table_id, seat_id }, EndUsage) => {
                CancelStep::Submit(CancelRequest::Personal(seat_body(*table_id, *seat_id)))
            }
            (Self::Personal { .. }, OtherSeat) => CancelStep::ManualEnd,
            (Self::Personal { .. }, Back) => CancelStep::Home,

            (Self::Group { table_id, .. }, EndAll) => {
                CancelStep::Submit(CancelRequest::GroupAll(CancelTableBody {
                    table_id: *table_id,
                }))
            }
            (Self::Group { table_id, seat_id }, EndMine) => {
                CancelStep::Submit(CancelRequest::GroupSingle(seat_body(*table_id, *seat_id)))
            }
            (Self::Group { .. }, OtherSeat | Back) => CancelStep::ManualEnd,

            _ => CancelStep::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::client::UsageEntry;

    fn usage(kind: &str, table_id: i64, seat_id: i64) -> UsageCheckResponse {
        UsageCheckResponse {
            success: true,
            msg: String::new(),
            usage_list: vec![UsageEntry {
                table_id,
                seat_id,
                kind: kind.to_string(),
            }],
        }
    }

    #[test]
    fn test_plan_from_usage() {
        let failed = UsageCheckResponse {
            success: false,
            msg: "No recognized user".into(),
            usage_list: vec![],
        };
        assert_eq!(
            CancelPlan::from_usage(&failed),
            CancelPlan::Manual {
                message: "No recognized user".into()
            }
        );
        assert_eq!(
            CancelPlan::from_usage(&UsageCheckResponse {
                success: true,
                ..Default::default()
            }),
            CancelPlan::NoUsage
        );
        assert_eq!(CancelPlan::from_usage(&usage("NONE", -1, -1)), CancelPlan::NoUsage);
        assert_eq!(
            CancelPlan::from_usage(&usage("PERSONAL", 2, 3)),
            CancelPlan::Personal { table_id: 2, seat_id: 3 }
        );
        assert_eq!(
            CancelPlan::from_usage(&usage("GROUP", 1, 4)),
            CancelPlan::Group { table_id: 1, seat_id: 4 }
        );
        assert_eq!(
            CancelPlan::from_usage(&usage("VIP", 1, 1)),
            CancelPlan::Unknown("VIP".into())
        );
    }

    #[test]
    fn test_first_entry_wins() {
        let mut response = usage("GROUP", 3, 1);
        response.usage_list.push(UsageEntry {
            table_id: 1,
            seat_id: 1,
            kind: "PERSONAL".into(),
        });
        assert_eq!(
            CancelPlan::from_usage(&response),
            CancelPlan::Group { table_id: 3, seat_id: 1 }
        );
    }

    #[test]
    fn test_prompts() {
        let plan = CancelPlan::Personal { table_id: 2, seat_id: 3 };
        assert!(plan.prompt().unwrap().contains("[B3]"));
        let plan = CancelPlan::Group { table_id: 3, seat_id: 1 };
        assert!(plan.prompt().unwrap().contains("table C"));
        let plan = CancelPlan::Manual { message: String::new() };
        assert_eq!(plan.prompt(), None);
    }

    #[test]
    fn test_personal_choices() {
        let plan = CancelPlan::Personal { table_id: 2, seat_id: 3 };
        assert_eq!(
            plan.request(CancelChoice::EndUsage, "u-1"),
            CancelStep::Submit(CancelRequest::Personal(CancelSeatBody {
                user_id: Some("u-1".into()),
                table_id: 2,
                seat_id: 3,
            }))
        );
        assert_eq!(plan.request(CancelChoice::OtherSeat, "u-1"), CancelStep::ManualEnd);
        assert_eq!(plan.request(CancelChoice::Back, "u-1"), CancelStep::Home);
        assert_eq!(plan.request(CancelChoice::EndAll, "u-1"), CancelStep::Stay);
    }

    #[test]
    fn test_group_choices() {
        let plan = CancelPlan::Group { table_id: 1, seat_id: 4 };
        assert_eq!(
            plan.request(CancelChoice::EndAll, "u-1"),
            CancelStep::Submit(CancelRequest::GroupAll(CancelTableBody { table_id: 1 }))
        );
        assert_eq!(
            plan.request(CancelChoice::EndMine, "u-1"),
            CancelStep::Submit(CancelRequest::GroupSingle(CancelSeatBody {
                user_id: Some("u-1".into()),
                table_id: 1,
                seat_id: 4,
            }))
        );
        assert_eq!(plan.request(CancelChoice::Back, "u-1"), CancelStep::ManualEnd);
    }

    #[test]
    fn test_no_usage_and_manual() {
        assert_eq!(
            CancelPlan::NoUsage.request(CancelChoice::EndUsage, "u-1"),
            CancelStep::ManualEnd
        );
        assert_eq!(CancelPlan::NoUsage.request(CancelChoice::Back, "u-1"), CancelStep::Home);
        let manual = CancelPlan::Manual { message: "x".into() };
        assert_eq!(manual.request(CancelChoice::Back, "u-1"), CancelStep::ManualEnd);
        assert_eq!(
            CancelPlan::Unknown("VIP".into()).request(CancelChoice::EndUsage, "u-1"),
            CancelStep::Home
        );
    }
}
