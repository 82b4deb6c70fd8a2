// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Toggles for optional plan rules.
///
/// The default policy applies only the rules every draft must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanPolicy {
    /// Reject plans where a segment does not start where the previous one ended.
    pub enforce_continuity: bool,
}

impl PlanPolicy {
    /// Creates a policy with continuity enforcement switched on or off.
    #[must_use]
    pub const fn new(enforce_continuity: bool) -> Self {
        Self { enforce_continuity }
    }
}
