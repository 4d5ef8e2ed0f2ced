use kornia_nms::{
    AreaNms, BoundingBox, NmsConfig, NmsError, nms_bbox_area, non_maximum_suppression_by_area,
};

#[test]
fn test_raw_records_match_parsed_boxes() -> Result<(), Box<dyn std::error::Error>> {
    let records = vec![
        vec![0.0, 0.0, 10.0, 10.0, 0.9],
        vec![1.0, 1.0, 9.0, 9.0],
        vec![12.0, 0.0, 20.0, 6.0],
        vec![15.0, 2.0, 18.0, 4.0],
        vec![40.0, 40.0, 41.0, 41.0],
    ];
    let boxes = records
        .iter()
        .map(|r| BoundingBox::try_from(r.as_slice()))
        .collect::<Result<Vec<_>, _>>()?;

    let keep = nms_bbox_area(&records, 0.5)?;
    assert_eq!(keep, non_maximum_suppression_by_area(&boxes, 0.5));
    assert_eq!(keep, vec![0]);
    Ok(())
}

#[test]
fn test_kept_indices_are_unique_and_in_range() -> Result<(), Box<dyn std::error::Error>> {
    let records: Vec<[f32; 4]> = (0..30)
        .map(|i| {
            let offset = (i % 7) as f32 * 3.0;
            let size = (i % 5) as f32 * 2.0 + 1.0;
            [offset, offset, offset + size, offset + size]
        })
        .collect();

    let keep = nms_bbox_area(&records, 0.3)?;
    assert!(!keep.is_empty());
    assert!(keep.len() <= records.len());

    let mut sorted = keep.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), keep.len());
    assert!(keep.iter().all(|&i| i < records.len()));

    // same input, same output
    assert_eq!(nms_bbox_area(&records, 0.3)?, keep);
    Ok(())
}

#[test]
fn test_malformed_record_fails_fast() {
    let records: Vec<Vec<f32>> = vec![vec![], vec![0.0, 0.0, 1.0, 1.0]];
    let err = nms_bbox_area(&records, 0.5).unwrap_err();
    assert_eq!(err, NmsError::InvalidInput {
            index: Some(0),
            len: 0
        });
    assert!(err.to_string().contains("at least four coordinates"));
}

#[test]
fn test_empty_records() -> Result<(), Box<dyn std::error::Error>> {
    let records: Vec<Vec<f32>> = vec![];
    assert!(nms_bbox_area(&records, 0.5)?.is_empty());
    Ok(())
}

#[test]
fn test_inverted_boxes_are_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let records = [[10.0, 10.0, 0.0, 0.0], [0.0, 0.0, 3.0, 3.0]];
    let keep = AreaNms::new(NmsConfig::default()).suppress(&records)?;
    // the inverted box has a positive area of 81, larger than the 4x4 box
    assert_eq!(keep, vec![0]);
    Ok(())
}

#[test]
fn test_largest_box_is_the_only_pick() -> Result<(), Box<dyn std::error::Error>> {
    let records = [
        [0.0, 0.0, 4.0, 4.0],
        [100.0, 100.0, 120.0, 110.0],
        [50.0, 0.0, 60.0, 30.0],
        [200.0, 200.0, 201.0, 201.0],
    ];
    for thresh in [-1.0, 0.0, 0.5, 1.0, 10.0] {
        // areas are 25, 231, 341 and 4
        assert_eq!(nms_bbox_area(&records, thresh)?, vec![2]);
    }
    Ok(())
}
