use proptest::prelude::*;
use statviz::axis::{
    AxisConfigurator, AxisConfiguratorConfig, AxisElement, AxisKind, NullDialogHost,
};

const KEYS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

#[derive(Debug, Clone)]
enum Step {
    Add(usize),
    Delete(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..KEYS.len() + 1).prop_map(Step::Add),
        (0..KEYS.len() + 1).prop_map(Step::Delete),
    ]
}

fn key(index: usize) -> &'static str {
    KEYS.get(index).copied().unwrap_or("missing")
}

proptest! {
    #[test]
    fn available_and_selected_stay_disjoint_and_bounded(
        limit in prop::option::of(0usize..5),
        steps in prop::collection::vec(step_strategy(), 0..40)
    ) {
        let mut config = AxisConfiguratorConfig::default();
        if let Some(limit) = limit {
            config = config.with_limit(AxisKind::XAxis, limit);
        }
        let mut configurator = AxisConfigurator::new(config, Box::new(NullDialogHost));
        configurator.set_catalog(
            AxisKind::XAxis,
            KEYS.iter().map(|key| AxisElement::new(*key, *key)).collect(),
        );
        configurator.open(AxisKind::XAxis).expect("open");

        for step in steps {
            match step {
                Step::Add(index) => configurator.add(key(index)),
                Step::Delete(index) => configurator.delete(key(index)),
            };

            let selected: Vec<&str> = configurator
                .selected()
                .iter()
                .map(|element| element.key.as_str())
                .collect();
            let available = configurator.available();

            prop_assert!(available.iter().all(|element| !selected.contains(&element.key.as_str())));
            prop_assert_eq!(selected.len() + available.len(), KEYS.len());
            if let Some(limit) = limit {
                prop_assert!(selected.len() <= limit);
                prop_assert_eq!(configurator.can_add(), selected.len() < limit);
            }
        }
    }
}
