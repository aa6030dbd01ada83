use rect_packer_core::config::PackerConfig;
use rect_packer_core::error::PackError;
use rect_packer_core::model::{PackResult, Rect, Size};
use rect_packer_core::{pack, pack_layout, pack_with_config, verify_packing};

/// Zero width is rejected before anything is placed
#[test]
fn test_zero_width() {
    let result = pack(&[Size::new(4, 4), Size::new(0, 3)]);
    match result {
        Err(PackError::InvalidDimension {
            index,
            width,
            height,
        }) => {
            assert_eq!(index, 1);
            assert_eq!(width, 0);
            assert_eq!(height, 3);
        }
        _ => panic!("Expected InvalidDimension error"),
    }
}

#[test]
fn test_zero_height() {
    let result = pack(&[Size::new(5, 0)]);
    assert!(matches!(
        result,
        Err(PackError::InvalidDimension { index: 0, .. })
    ));
}

#[test]
fn test_side_above_max_dimension() {
    let cfg = PackerConfig::builder().max_dimension(64).build();
    let result = pack_with_config(&[Size::new(64, 64), Size::new(65, 1)], cfg);
    assert!(matches!(
        result,
        Err(PackError::InvalidDimension {
            index: 1,
            width: 65,
            height: 1
        })
    ));
}

#[test]
fn test_side_at_max_dimension() {
    let cfg = PackerConfig::builder().max_dimension(64).build();
    let out = pack_with_config(&[Size::new(64, 64)], cfg).expect("pack");
    assert_eq!((out.canvas_width, out.canvas_height), (64, 64));
}

#[test]
fn test_zero_max_dimension_config() {
    let cfg = PackerConfig {
        max_dimension: 0,
        ..Default::default()
    };
    assert!(matches!(cfg.validate(), Err(PackError::InvalidConfig(_))));
    assert!(matches!(
        pack_with_config(&[Size::new(1, 1)], cfg),
        Err(PackError::InvalidConfig(_))
    ));
}

#[test]
fn test_oversized_max_dimension_config() {
    let cfg = PackerConfig::builder()
        .max_dimension(rect_packer_core::config::MAX_DIMENSION_LIMIT + 1)
        .build();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_default_config_is_valid() {
    let cfg = PackerConfig::default();
    assert!(cfg.validate().is_ok());
    assert!(cfg.verify);
    assert!(!cfg.parallel);
}

#[test]
fn test_config_deserializes_with_defaults() {
    let cfg: PackerConfig = serde_json::from_str(r#"{"parallel": true}"#).expect("parse");
    assert!(cfg.parallel);
    assert_eq!(cfg.max_dimension, PackerConfig::default().max_dimension);
    assert!(cfg.verify);
}

#[test]
fn test_empty_layout() {
    let atlas = pack_layout(Vec::<(String, u32, u32)>::new(), PackerConfig::default())
        .expect("pack");
    assert!(atlas.frames.is_empty());
    assert_eq!((atlas.width, atlas.height), (0, 0));
}

#[test]
fn test_verify_detects_overlap() {
    let sizes = [Size::new(4, 4), Size::new(4, 4)];
    let bogus = PackResult {
        placements: vec![Rect::new(0, 0, 4, 4), Rect::new(2, 2, 4, 4)],
        canvas_width: 8,
        canvas_height: 8,
    };
    assert!(matches!(
        verify_packing(&sizes, &bogus),
        Err(PackError::InvariantViolation(_))
    ));
}

#[test]
fn test_verify_detects_out_of_canvas() {
    let sizes = [Size::new(4, 4)];
    let bogus = PackResult {
        placements: vec![Rect::new(1, 0, 4, 4)],
        canvas_width: 4,
        canvas_height: 4,
    };
    let err = verify_packing(&sizes, &bogus).unwrap_err();
    assert!(err.to_string().contains("exceeds canvas"), "{err}");
}

#[test]
fn test_verify_detects_size_mismatch() {
    let sizes = [Size::new(4, 4)];
    let bogus = PackResult {
        placements: vec![Rect::new(0, 0, 2, 4)],
        canvas_width: 4,
        canvas_height: 4,
    };
    assert!(verify_packing(&sizes, &bogus).is_err());
    let missing = PackResult {
        placements: vec![],
        canvas_width: 4,
        canvas_height: 4,
    };
    assert!(verify_packing(&sizes, &missing).is_err());
}
