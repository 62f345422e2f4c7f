//! User presenter

use serde::{Deserialize, Serialize};

use super::TimeDisplay;
use crate::domain::{Entity, User};

/// Display-ready user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserViewModel {
    pub id: String,
    pub name: String,
    pub email: String,
    pub member_since: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserPresenter {
    time: TimeDisplay,
}

impl UserPresenter {
    pub fn new(time: TimeDisplay) -> Self {
        Self { time }
    }

    pub fn present(&self, user: &User) -> UserViewModel {
        UserViewModel {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            member_since: self.time.format(user.created_at()),
        }
    }

    pub fn present_all(&self, users: &[User]) -> Vec<UserViewModel> {
        users.iter().map(|u| self.present(u)).collect()
    }
}

/// Present a user with the default display settings
pub fn present_user(user: &User) -> UserViewModel {
    UserPresenter::default().present(user)
}
