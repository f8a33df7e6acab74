use flagspec::{
    FalseSpecification, FeatureBuilder, FeatureProvider, InMemoryProviderFactory, ToggleChecker,
    TrueSpecification,
};

const FLAG: &str = "someFlag";

fn checker(feature: FeatureBuilder) -> ToggleChecker {
    ToggleChecker::new(&InMemoryProviderFactory::new([feature.build()])).unwrap()
}

#[test]
fn disabled_with_false_specification() {
    assert!(!checker(FeatureBuilder::new(FLAG).with("false", FalseSpecification)).is_enabled(FLAG));
}

#[test]
fn disabled_if_any_specification_is_false() {
    let checker = checker(
        FeatureBuilder::new(FLAG)
            .with("false", FalseSpecification)
            .with("true", TrueSpecification),
    );
    assert!(!checker.is_enabled(FLAG));

    let checker = self::checker(
        FeatureBuilder::new(FLAG)
            .with("true", TrueSpecification)
            .with("false", FalseSpecification),
    );
    assert!(!checker.is_enabled(FLAG));
}

#[test]
fn disabled_if_not_defined() {
    let checker = ToggleChecker::from_provider(FeatureProvider::default());
    assert!(!checker.is_enabled("non existing"));
}

#[test]
fn disabled_if_no_specification() {
    assert!(!checker(FeatureBuilder::new(FLAG)).is_enabled(FLAG));
}

#[test]
fn enabled_with_true_specification() {
    assert!(checker(FeatureBuilder::new(FLAG).with("true", TrueSpecification)).is_enabled(FLAG));
}

#[test]
fn enabled_if_every_specification_is_true() {
    let checker = checker(
        FeatureBuilder::new(FLAG)
            .with("true", TrueSpecification)
            .with("true", TrueSpecification),
    );
    assert!(checker.is_enabled(FLAG));
    assert!(checker.is_enabled("SOMEFLAG"));
}

#[test]
fn detailed_report_explains_result() {
    let checker = checker(
        FeatureBuilder::new(FLAG)
            .with("true", TrueSpecification)
            .with("false", FalseSpecification),
    );
    let report = checker.evaluate_detailed("someflag");
    assert!(report.found());
    assert!(!report.enabled());
    assert_eq!(report.to_string(), "someFlag = false [true: true, false: false]");

    let report = checker.evaluate_detailed("other");
    assert!(!report.found());
    assert_eq!(report.to_string(), "other = false (unknown flag)");
}
