use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Hex fingerprint identifying one certificate inside the agent store.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Thumbprint(String);

impls_for_string_newtype!(Thumbprint);
