// SPDX-License-Identifier: Apache-2.0
//! Account session: login status and the self profile.

use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{
    enum_code_opt, replace, ActionCallbacks, Bridge, Domain, Field, Store,
};
use stagecast_proto::codes::LoginStatus;
use stagecast_proto::records::UserProfile;
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Mirrored login state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    /// Profile of the logged-in account, unset before login.
    pub login_user_info: Option<UserProfile>,
    /// Session status, unset before the first engine report.
    pub login_status: Option<LoginStatus>,
    /// Application id the engine was started with.
    pub sdk_app_id: u32,
}

/// Wiring of the login store into the bridge.
pub enum LoginDomain {}

impl Domain for LoginDomain {
    type State = LoginState;
    const KIND: StoreKind = StoreKind::Login;
    const FIELDS: &'static [Field<LoginState>] = &[
        Field {
            name: "loginUserInfo",
            apply: |state, payload| replace(&mut state.login_user_info, payload),
        },
        Field {
            name: "loginStatus",
            apply: |state, payload| enum_code_opt(&mut state.login_status, payload),
        },
        Field {
            name: "sdkAppID",
            apply: |state, payload| replace(&mut state.sdk_app_id, payload),
        },
    ];
    const EVENTS: &'static [&'static str] = &[];
}

/// Operations the login facade routes to the engine.
pub const OPERATIONS: &[&str] = &["login", "logout", "setSelfInfo"];

/// Parameters for `login`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginOptions {
    /// Application id issued by the console.
    #[serde(rename = "sdkAppID")]
    pub sdk_app_id: u32,
    /// User to sign in as.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Signed credential for the user.
    #[serde(rename = "userSig")]
    pub user_sig: String,
}

/// Parameters for `setSelfInfo`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetSelfInfoOptions {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// New avatar URL.
    #[serde(rename = "avatarURL", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// New signature line.
    #[serde(rename = "selfSignature", skip_serializing_if = "Option::is_none")]
    pub self_signature: Option<String>,
}

/// Resolve the global login store, binding on first use.
pub fn store(bridge: &Bridge) -> Result<Arc<Store<LoginDomain>>, ScopeError> {
    bridge.store::<LoginDomain>(&ScopeKey::Global)
}

/// Sign in to the engine.
pub fn login(bridge: &Bridge, options: &LoginOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("login", options, callbacks);
}

/// Sign out of the engine.
pub fn logout(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("logout", serde_json::json!({}), callbacks);
}

/// Update the self profile.
pub fn set_self_info(bridge: &Bridge, options: &SetSelfInfoOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("setSelfInfo", options, callbacks);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &mut LoginState, name: &str, payload: &str) {
        let field = LoginDomain::FIELDS
            .iter()
            .find(|field| field.name == name)
            .unwrap();
        (field.apply)(state, payload);
    }

    #[test]
    fn status_maps_through_code_table() {
        let mut state = LoginState::default();
        assert_eq!(state.login_status, None);
        apply(&mut state, "loginStatus", "1");
        assert_eq!(state.login_status, Some(LoginStatus::Logined));
        apply(&mut state, "loginStatus", "5");
        assert_eq!(state.login_status, Some(LoginStatus::Logined));
    }

    #[test]
    fn profile_replaces_wholesale() {
        let mut state = LoginState::default();
        apply(&mut state, "loginUserInfo", r#"{"userID":"u1","nickname":"Ann"}"#);
        assert_eq!(state.login_user_info.as_ref().unwrap().nickname, "Ann");
        apply(&mut state, "loginUserInfo", "null");
        assert_eq!(state.login_user_info, None);
    }

    #[test]
    fn login_options_use_wire_names() {
        let value = serde_json::to_value(LoginOptions {
            sdk_app_id: 1_400_000_000,
            user_id: "u1".into(),
            user_sig: "sig".into(),
        })
        .unwrap();
        assert_eq!(value["sdkAppID"], 1_400_000_000);
        assert_eq!(value["userID"], "u1");
        assert_eq!(value["userSig"], "sig");
    }
}
