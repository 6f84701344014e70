//! # Route guard decision
//!
//! Every protected page is declared with an [`AccessRule`]: the roles allowed
//! to see it and, for USER pages, the module the page belongs to. Given the
//! session snapshot, [`authorize`] returns one of
//!
//! | Session | Outcome |
//! |---------|---------|
//! | still loading | [`Access::Pending`] (render nothing) |
//! | no user | redirect to [`Destination::Login`] |
//! | role not allowed, ADMIN | redirect to [`Destination::AdminHome`] |
//! | role not allowed, USER | redirect to the user's module route |
//! | USER on another module's page | redirect to the user's module route |
//! | otherwise | [`Access::Granted`] |
//!
//! The decision is pure; performing the navigation is the router's job.

use crate::models::{Role, SessionUser};
use crate::modules::{route_for, ModuleKey};

/// Where a redirect should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    AdminHome,
    /// The landing route of a module; `None` means the default module.
    Module(Option<ModuleKey>),
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::AdminHome => "/admin/users",
            Destination::Module(module) => route_for(module),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Pending,
    Granted,
    Redirect(Destination),
}

/// Who may see a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRule {
    pub roles: &'static [Role],
    pub module: Option<ModuleKey>,
}

impl AccessRule {
    pub const ADMIN: AccessRule = AccessRule {
        roles: &[Role::Admin],
        module: None,
    };

    /// A USER page belonging to `module`.
    pub const fn module(module: ModuleKey) -> Self {
        AccessRule {
            roles: &[Role::User],
            module: Some(module),
        }
    }
}

/// Landing page of a logged-in user: the admin panel or their module.
pub fn home_for(user: &SessionUser) -> Destination {
    match user.role {
        Role::Admin => Destination::AdminHome,
        Role::User => Destination::Module(user.module),
    }
}

pub fn authorize(loading: bool, user: Option<&SessionUser>, rule: &AccessRule) -> Access {
    if loading {
        return Access::Pending;
    }
    let Some(user) = user else {
        return Access::Redirect(Destination::Login);
    };

    if !rule.roles.contains(&user.role) {
        return Access::Redirect(home_for(user));
    }

    if user.role == Role::User {
        if let Some(required) = rule.module {
            if user.module.unwrap_or(ModuleKey::Chat) != required {
                return Access::Redirect(Destination::Module(user.module));
            }
        }
    }

    Access::Granted
}
