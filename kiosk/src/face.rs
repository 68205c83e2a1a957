//! Face identification result

use shared::client::FaceUploadResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceVerdict {
    Identified { user_id: String, is_new: bool },
    /// Flagged by the server; the user may not reserve
    Restricted,
    /// Recognition ran but returned no user id
    Unidentified,
    /// Server reported failure
    Failed,
}

impl FaceVerdict {
    pub fn from_response(response: &FaceUploadResponse) -> Self {
        if !response.success {
            return Self::Failed;
        }
        if response.is_malicious {
            return Self::Restricted;
        }
        let user_id = response.user_id.trim();
        if user_id.is_empty() {
            return Self::Unidentified;
        }
        Self::Identified {
            user_id: user_id.to_string(),
            is_new: response.is_new_person,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Identified { user_id, .. } => Some(user_id),
            _ => None,
        }
    }
}
