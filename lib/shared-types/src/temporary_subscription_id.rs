use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Identifier of the pending signature session issued by the store when a
/// signing attempt starts and echoed back when it finishes.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct TemporarySubscriptionId(String);

impls_for_string_newtype!(TemporarySubscriptionId);
