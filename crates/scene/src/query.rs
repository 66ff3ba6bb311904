use crate::World;
use crate::entity::EntityId;
use crate::selection::SelectionSet;

/// Equality filter over an entity's string properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFilter {
    pub key: String,
    pub value: String,
}

impl PropertyFilter {
    pub fn eq(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

fn properties_match(world: &World, entity: EntityId, filters: &[PropertyFilter]) -> bool {
    let Some(props) = world.properties(entity) else {
        return false;
    };
    filters
        .iter()
        .all(|f| props.get(&f.key) == Some(f.value.as_str()))
}

/// Entities whose properties satisfy every filter.
///
/// Entities without a properties component never match. An empty filter list
/// matches every tagged entity.
///
/// Ordering contract:
/// - The returned `SelectionSet` iterates in ascending `EntityId::index()`
///   order.
pub fn query_entities(world: &World, filters: &[PropertyFilter]) -> SelectionSet {
    let mut out = SelectionSet::new();
    for entity in world.entities() {
        if properties_match(world, entity, filters) {
            out.insert(entity);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{PropertyFilter, query_entities};
    use crate::World;
    use crate::components::ComponentProperties;

    #[test]
    fn filters_are_conjunctive() {
        let mut world = World::new();

        let a = world.spawn();
        world.set_properties(
            a,
            ComponentProperties::new(vec![
                ("election".into(), "0".into()),
                ("province".into(), "Madrid".into()),
            ]),
        );

        let b = world.spawn();
        world.set_properties(
            b,
            ComponentProperties::new(vec![
                ("election".into(), "0".into()),
                ("province".into(), "Sevilla".into()),
            ]),
        );

        let c = world.spawn();
        world.set_properties(
            c,
            ComponentProperties::new(vec![
                ("election".into(), "1".into()),
                ("province".into(), "Madrid".into()),
            ]),
        );

        let hits = query_entities(
            &world,
            &[
                PropertyFilter::eq("election", "0"),
                PropertyFilter::eq("province", "Madrid"),
            ],
        );
        let got: Vec<u32> = hits.iter_indices().collect();
        assert_eq!(got, vec![a.index()]);
    }

    #[test]
    fn untagged_entities_never_match() {
        let mut world = World::new();
        world.spawn();
        let hits = query_entities(&world, &[]);
        assert!(hits.is_empty());
    }

    #[test]
    fn results_are_sorted_by_entity_index() {
        let mut world = World::new();
        let mut expected = Vec::new();
        for i in 0..5 {
            let e = world.spawn();
            world.set_properties(
                e,
                ComponentProperties::new(vec![("election".into(), (i % 2).to_string())]),
            );
            if i % 2 == 0 {
                expected.push(e.index());
            }
        }
        let hits = query_entities(&world, &[PropertyFilter::eq("election", "0")]);
        let got: Vec<u32> = hits.iter_indices().collect();
        assert_eq!(got, expected);
    }
}
