use crate::algebra::NormType;
use crate::equilibration::*;

#[test]
fn test_settings_defaults() {
    let settings = EquilibrationSettings::<f64>::default();

    assert_eq!(settings.equilibrate_norm, NormType::Two);
    assert_eq!(settings.normalize_norm, NormType::Frobenius);
    assert_eq!(settings.sinkhorn_max_iter, 50);
    assert_eq!(settings.sinkhorn_tol, 0.);
    assert_eq!(settings.normest_max_iter, 50);
    assert_eq!(settings.normest_tol, 1e-4);
    assert!(settings.validate().is_ok());
    assert!(settings.is_squared());
}

#[test]
fn test_settings_builder() {
    let settings = EquilibrationSettingsBuilder::<f32>::default()
        .sinkhorn_max_iter(10)
        .sinkhorn_tol(1e-3)
        .normalize_norm(NormType::Two)
        .build()
        .unwrap();

    assert_eq!(settings.sinkhorn_max_iter, 10);
    assert_eq!(settings.sinkhorn_tol, 1e-3_f32);
    assert_eq!(settings.normalize_norm, NormType::Two);
}

#[test]
fn test_settings_builder_rejects() {
    assert!(EquilibrationSettingsBuilder::<f64>::default()
        .equilibrate_norm(NormType::One)
        .build()
        .is_err());

    assert!(EquilibrationSettingsBuilder::<f64>::default()
        .normalize_norm(NormType::One)
        .build()
        .is_err());

    assert!(EquilibrationSettingsBuilder::<f64>::default()
        .sinkhorn_max_iter(0)
        .build()
        .is_err());

    assert!(EquilibrationSettingsBuilder::<f64>::default()
        .normest_tol(-1.)
        .build()
        .is_err());

    assert!(EquilibrationSettingsBuilder::<f64>::default()
        .sinkhorn_tol(f64::NAN)
        .build()
        .is_err());
}

#[test]
fn test_settings_validate_in_place() {
    let mut settings = EquilibrationSettings::<f64>::default();
    settings.normest_max_iter = 0;
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("normest_max_iter"))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_serde() {
    let settings = EquilibrationSettingsBuilder::<f64>::default()
        .sinkhorn_max_iter(7)
        .build()
        .unwrap();

    let json = serde_json::to_string(&settings).unwrap();
    let back: EquilibrationSettings<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(settings, back);

    // missing fields take their defaults
    let partial: EquilibrationSettings<f64> =
        serde_json::from_str(r#"{"sinkhorn_max_iter": 3}"#).unwrap();
    assert_eq!(partial.sinkhorn_max_iter, 3);
    assert_eq!(partial.normalize_norm, NormType::Frobenius);
}
