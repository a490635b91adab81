//! Reactji groups - reactions aggregated by reactji id

use serde::Serialize;

use crate::entities::Reactji;

/// All viewers who applied one reactji to one reactable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactjiGroup {
    /// `{reactableId}:{reactjiId}`
    pub id: String,
    /// The reactji id shared by the group
    pub reactji: String,
    pub count: usize,
    /// Whether the viewer is one of the reactors
    pub is_viewer_reactji: bool,
}

/// Group reactjis by id, preserving first-seen order
pub fn group_reactjis(reactjis: &[Reactji], viewer_id: &str, id_prefix: &str) -> Vec<ReactjiGroup> {
    let mut groups: Vec<ReactjiGroup> = Vec::new();

    for reactji in reactjis {
        let is_viewer = reactji.user_id == viewer_id;
        match groups.iter_mut().find(|g| g.reactji == reactji.id) {
            Some(group) => {
                group.count += 1;
                group.is_viewer_reactji |= is_viewer;
            }
            None => groups.push(ReactjiGroup {
                id: format!("{id_prefix}:{}", reactji.id),
                reactji: reactji.id.clone(),
                count: 1,
                is_viewer_reactji: is_viewer,
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reactji(id: &str, user: &str) -> Reactji {
        Reactji::new(id, user)
    }

    #[test]
    fn test_group_by_reactji() {
        let reactjis = vec![
            reactji("+1", "u1"),
            reactji("heart", "u2"),
            reactji("+1", "u2"),
        ];

        let groups = group_reactjis(&reactjis, "u1", "c1");
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].id, "c1:+1");
        assert_eq!(groups[0].count, 2);
        assert!(groups[0].is_viewer_reactji);

        assert_eq!(groups[1].id, "c1:heart");
        assert_eq!(groups[1].count, 1);
        assert!(!groups[1].is_viewer_reactji);
    }

    #[test]
    fn test_empty() {
        assert!(group_reactjis(&[], "u1", "c1").is_empty());
    }
}
