// SPDX-License-Identifier: Apache-2.0
//! The canonical roster of routable operation names.
//!
//! Connectors register a handler per name at bridge construction; the
//! testkit's fake engine registers them all. Names are unique across
//! domains.

/// Every operation name the bridge can route, across all domains.
pub fn all_operations() -> Vec<&'static str> {
    let groups: &[&[&str]] = &[
        crate::login::OPERATIONS,
        crate::device::OPERATIONS,
        crate::live_list::OPERATIONS,
        crate::summary::OPERATIONS,
        crate::gift::OPERATIONS,
        crate::like::OPERATIONS,
        crate::barrage::OPERATIONS,
        crate::beauty::OPERATIONS,
        crate::audio_effect::OPERATIONS,
        crate::co_host::OPERATIONS,
        crate::co_guest::OPERATIONS,
        crate::audience::OPERATIONS,
        crate::seat::OPERATIONS,
    ];
    groups.iter().flat_map(|group| group.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn operation_names_are_unique() {
        let all = all_operations();
        let unique: HashSet<_> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn roster_covers_every_domain() {
        let all = all_operations();
        for expected in ["login", "takeSeat", "sendGift", "callExperimentalAPI", "disconnect"] {
            assert!(all.contains(&expected), "missing {expected}");
        }
        assert_eq!(all.len(), 65);
    }
}
