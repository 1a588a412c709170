//! Property tests for the layout engine invariants.

use archway_layout::{compute_layout, Anchor, DependencyEdge, DependencyPayload, Endpoint};
use proptest::prelude::*;

fn endpoint_strategy() -> impl Strategy<Value = Endpoint> {
    // A small name pool so generated payloads actually share teams.
    let names = prop::sample::select(vec!["Web", "Api", "Data", "Mobile", "Infra", "Core"]);
    (names, prop::option::of(0u32..6)).prop_map(|(name, sprint)| Endpoint {
        name: name.to_string(),
        sprint,
    })
}

fn edge_strategy() -> impl Strategy<Value = DependencyEdge> {
    (endpoint_strategy(), endpoint_strategy()).prop_map(|(from, to)| DependencyEdge::new(from, to))
}

fn payload_strategy() -> impl Strategy<Value = DependencyPayload> {
    (0u32..5, prop::collection::vec(edge_strategy(), 0..24))
        .prop_map(|(max_sprint, deps)| DependencyPayload { max_sprint, deps })
}

proptest! {
    /// Only the four legal anchor pairs ever appear, never two equal sides.
    #[test]
    fn anchor_pairs_are_always_symmetric(payload in payload_strategy()) {
        let layout = compute_layout(&payload);
        for relation in layout.relations_by_source.values().flatten() {
            let pair = (relation.source_anchor, relation.target_anchor);
            prop_assert!(matches!(
                pair,
                (Anchor::Top, Anchor::Bottom)
                    | (Anchor::Bottom, Anchor::Top)
                    | (Anchor::Left, Anchor::Right)
                    | (Anchor::Right, Anchor::Left)
            ));
        }
    }

    /// Every input edge produces exactly one relation.
    #[test]
    fn one_relation_per_edge(payload in payload_strategy()) {
        let layout = compute_layout(&payload);
        prop_assert_eq!(layout.relation_count(), payload.deps.len());
    }

    /// Repeated invocations produce structurally identical layouts.
    #[test]
    fn layout_is_deterministic(payload in payload_strategy()) {
        prop_assert_eq!(compute_layout(&payload), compute_layout(&payload));
    }

    /// A team's row equals the index of its first appearance scanning
    /// `from` then `to`, edge by edge.
    #[test]
    fn team_rows_follow_first_seen_order(payload in payload_strategy()) {
        let layout = compute_layout(&payload);

        let mut expected: Vec<&str> = Vec::new();
        for dep in &payload.deps {
            for name in [dep.from.name.as_str(), dep.to.name.as_str()] {
                if !expected.contains(&name) {
                    expected.push(name);
                }
            }
        }

        prop_assert_eq!(layout.teams.len(), expected.len());
        for (row, name) in expected.iter().enumerate() {
            prop_assert_eq!(layout.row(name), Some(row));
        }
    }

    /// Every emitted cell id stays inside the promised grid: row below the
    /// team count, column within `1..=max_sprint + 1`.
    #[test]
    fn all_cells_stay_inside_the_grid(payload in payload_strategy()) {
        let layout = compute_layout(&payload);
        let rows = layout.teams.len();
        let backlog = layout.backlog_column;

        let ids = layout
            .relations_by_source
            .iter()
            .flat_map(|(source, relations)| {
                std::iter::once(source).chain(relations.iter().map(|r| &r.target_id))
            });

        for id in ids {
            let mut parts = id.as_str().splitn(3, '-');
            prop_assert_eq!(parts.next(), Some("board"));
            let row: usize = parts.next().unwrap().parse().unwrap();
            let column: u32 = parts.next().unwrap().parse().unwrap();
            prop_assert!(row < rows);
            prop_assert!((1..=backlog).contains(&column));
        }
    }
}
