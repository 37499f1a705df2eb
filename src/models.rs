use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Chain {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// State as reported by the wallet bridge. Missing fields mean "not known yet".
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletSnapshot {
    pub mounted: bool,
    pub account: Option<Account>,
    pub chain: Option<Chain>,
    pub is_connecting: bool,
}

impl WalletSnapshot {
    pub fn status(&self) -> WalletStatus {
        if !self.mounted {
            return WalletStatus::NotReady;
        }
        match &self.account {
            None => WalletStatus::NotConnected {
                is_connecting: self.is_connecting,
            },
            Some(account) => WalletStatus::Connected {
                account: account.clone(),
                chain: self.chain.clone(),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum WalletStatus {
    #[default]
    NotReady,
    NotConnected {
        is_connecting: bool,
    },
    Connected {
        account: Account,
        chain: Option<Chain>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConnectError {
    pub message: String,
}

impl ConnectError {
    pub fn new(message: impl Into<String>) -> Self {
        ConnectError { message: message.into() }
    }
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConnectError {}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum ToastKind {
    #[default]
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}
