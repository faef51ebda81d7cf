// tests/batch_tests.rs
use aster_indices::batch::{load_batch_config, process_batch, BatchConfig, BatchData, Operation};
use aster_indices::utils::fixed_point::NODATA_VALUE_INT;
use aster_indices::IndexCatalog;
use ndarray::Array3;

fn numbered_image(width: usize, height: usize) -> Array3<f32> {
    Array3::from_shape_fn((9, height, width), |(band, _, _)| band as f32 + 1.0)
}

#[test]
fn test_batch_config_defaults() {
    let config: BatchConfig = serde_json::from_str(r#"{"operations": [{"index": "NDVI"}]}"#).unwrap();
    assert!(config.global.float);
    assert_eq!(config.global.scale_factor, 1000);
    assert_eq!(config.global.threads, None);
    assert_eq!(config.operations.len(), 1);
    assert_eq!(config.operations[0].float, None);
}

#[test]
fn test_batch_with_overrides() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut image = numbered_image(2, 2);
    image[[1, 1, 1]] = 0.0;
    let catalog = IndexCatalog::new(image.view(), None).unwrap();

    let config: BatchConfig = serde_json::from_str(
        r#"{
            "global": {"float": false, "scale_factor": 10000, "threads": 2},
            "operations": [
                {"index": "NDVI"},
                {"index": "MgOH_2", "float": true},
                {"index": "AlOH", "scale_factor": 100}
            ]
        }"#,
    )
    .unwrap();

    let outputs = process_batch(&catalog, &config).unwrap();
    let names: Vec<&str> = outputs.iter().map(|o| o.index.as_str()).collect();
    assert_eq!(names, ["NDVI", "MgOH_2", "AlOH"]);

    match &outputs[0].data {
        BatchData::Fixed { data, scale_factor } => {
            assert_eq!(*scale_factor, 10000);
            assert_eq!(data[[0, 0, 0]], 2000);
            assert_eq!(data[[0, 1, 1]], NODATA_VALUE_INT);
        }
        other => panic!("expected fixed-point NDVI, got {:?}", other),
    }
    assert_eq!(outputs[0].valid_pixels, 3);

    match &outputs[1].data {
        BatchData::Float { data, mask } => {
            assert_eq!(data.dim(), (1, 2, 2));
            assert!(mask.iter().all(|&masked| !masked));
            assert!((data[[0, 0, 0]] - 0.875).abs() < 1e-6);
        }
        other => panic!("expected float MgOH_2, got {:?}", other),
    }
    assert_eq!(outputs[1].valid_pixels, 4);

    match &outputs[2].data {
        BatchData::Fixed { data, scale_factor } => {
            assert_eq!(*scale_factor, 100);
            assert_eq!(data[[0, 0, 0]], 71);
        }
        other => panic!("expected fixed-point AlOH, got {:?}", other),
    }
}

#[test]
fn test_empty_batch_computes_everything() {
    let image = numbered_image(1, 1);
    let catalog = IndexCatalog::new(image.view(), None).unwrap();

    let outputs = process_batch(&catalog, &BatchConfig::default()).unwrap();
    assert_eq!(outputs.len(), catalog.registry().len());
    assert!(outputs.iter().map(|o| o.index.as_str()).eq(catalog.names()));
    assert!(outputs.iter().all(|o| matches!(o.data, BatchData::Float { .. })));
}

#[test]
fn test_batch_rejects_unknown_index() {
    let image = numbered_image(1, 1);
    let catalog = IndexCatalog::new(image.view(), None).unwrap();

    let config = BatchConfig {
        operations: vec![Operation::new("NDVI"), Operation::new("NDWI")],
        ..Default::default()
    };

    let err = process_batch(&catalog, &config).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("operation 2 of 2"), "{}", message);
    assert!(message.contains("NDWI"), "{}", message);
}

#[test]
fn test_load_missing_batch_config() {
    let err = load_batch_config("does/not/exist.json").unwrap_err();
    assert!(format!("{:#}", err).contains("reading batch config"));
}

/// A real value equal to the fill value stays distinguishable from a masked pixel
#[test]
fn test_float_batch_keeps_mask() {
    let mut image = numbered_image(2, 1);
    image[[1, 0, 0]] = -999.0;
    image[[0, 0, 0]] = 1.0;
    image[[0, 0, 1]] = 0.0;
    let catalog = IndexCatalog::new(image.view(), None).unwrap();

    let config = BatchConfig {
        operations: vec![Operation::new("Ferric_iron")],
        ..Default::default()
    };
    let outputs = process_batch(&catalog, &config).unwrap();

    match &outputs[0].data {
        BatchData::Float { data, mask } => {
            assert_eq!(data[[0, 0, 0]], -999.0);
            assert_eq!(data[[0, 0, 1]], -999.0);
            assert!(!mask[[0, 0, 0]]);
            assert!(mask[[0, 0, 1]]);
        }
        other => panic!("expected float Ferric_iron, got {:?}", other),
    }
    assert_eq!(outputs[0].valid_pixels, 1);
}
