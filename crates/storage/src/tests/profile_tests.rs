use super::{create_test_profile, create_test_profiles, create_test_storage};
use crate::StorageError;
use argo_core::{CoordRange, ProfileFilter};

fn wide_open() -> ProfileFilter {
    ProfileFilter::new(f64::MAX, CoordRange::new(-90.0, 90.0), CoordRange::new(-180.0, 180.0))
}

#[test]
fn query_before_any_load_is_empty() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(storage.query_profiles(&wide_open()).unwrap().is_empty());
    assert!(storage.paginated_profiles(5).unwrap().is_empty());
    assert_eq!(storage.profile_bounds().unwrap().count, 0);
}

#[test]
fn filter_keeps_shallow_profile_only() {
    let (storage, _temp_dir) = create_test_storage();
    storage
        .replace_profiles(&[
            create_test_profile(1, 100.0, 10.0, 20.0),
            create_test_profile(2, 600.0, 10.0, 20.0),
        ])
        .unwrap();

    let filter =
        ProfileFilter::new(500.0, CoordRange::new(-30.0, 30.0), CoordRange::new(-60.0, 60.0));
    let rows = storage.query_profiles(&filter).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sample_id, 1);
}

#[test]
fn filter_bounds_are_inclusive() {
    let (storage, _temp_dir) = create_test_storage();
    storage
        .replace_profiles(&[
            create_test_profile(1, 500.0, -30.0, -60.0),
            create_test_profile(2, 0.0, 30.0, 60.0),
            create_test_profile(3, 500.5, 0.0, 0.0),
            create_test_profile(4, 10.0, 30.5, 0.0),
            create_test_profile(5, 10.0, 0.0, 60.5),
        ])
        .unwrap();

    let filter =
        ProfileFilter::new(500.0, CoordRange::new(-30.0, 30.0), CoordRange::new(-60.0, 60.0));
    let ids: Vec<i64> =
        storage.query_profiles(&filter).unwrap().iter().map(|p| p.sample_id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn filter_agrees_with_in_memory_predicate() {
    let (storage, _temp_dir) = create_test_storage();
    let profiles = create_test_profiles();
    storage.replace_profiles(&profiles).unwrap();

    let filter = ProfileFilter::new(70.0, CoordRange::new(2.0, 9.0), CoordRange::new(0.0, 12.0));
    let expected: Vec<_> = profiles.iter().filter(|p| filter.matches(p)).cloned().collect();
    assert_eq!(storage.query_profiles(&filter).unwrap(), expected);
    assert_eq!(expected.iter().map(|p| p.sample_id).collect::<Vec<_>>(), vec![2, 3, 4, 5, 6]);
}

#[test]
fn inverted_range_yields_empty_not_error() {
    let (storage, _temp_dir) = create_test_storage();
    storage.replace_profiles(&create_test_profiles()).unwrap();

    let filter = ProfileFilter::new(500.0, CoordRange::new(30.0, -30.0), CoordRange::new(-60.0, 60.0));
    assert!(storage.query_profiles(&filter).unwrap().is_empty());
}

#[test]
fn replace_discards_previous_rows() {
    let (storage, _temp_dir) = create_test_storage();
    storage.replace_profiles(&create_test_profiles()).unwrap();

    let rows2 = vec![create_test_profile(42, 5.0, 1.0, 1.0), create_test_profile(43, 6.0, 2.0, 2.0)];
    assert_eq!(storage.replace_profiles(&rows2).unwrap(), 2);

    assert_eq!(storage.query_profiles(&wide_open()).unwrap(), rows2);
}

#[test]
fn replace_with_duplicate_ids_is_schema_error_and_keeps_old_table() {
    let (storage, _temp_dir) = create_test_storage();
    storage.replace_profiles(&create_test_profiles()).unwrap();

    let dupes = vec![create_test_profile(7, 1.0, 0.0, 0.0), create_test_profile(7, 2.0, 0.0, 0.0)];
    let err = storage.replace_profiles(&dupes).unwrap_err();
    assert!(matches!(err, StorageError::Schema(_)), "got {err:?}");
    assert_eq!(storage.query_profiles(&wide_open()).unwrap().len(), 10);
}

#[test]
fn pagination_returns_at_most_limit_in_sample_order() {
    let (storage, _temp_dir) = create_test_storage();
    let mut profiles = create_test_profiles();
    profiles.reverse();
    storage.replace_profiles(&profiles).unwrap();

    let page = storage.paginated_profiles(3).unwrap();
    assert_eq!(page.iter().map(|p| p.sample_id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(storage.paginated_profiles(50).unwrap().len(), 10);
}

#[test]
fn pagination_rejects_zero_limit() {
    let (storage, _temp_dir) = create_test_storage();
    storage.replace_profiles(&create_test_profiles()).unwrap();
    assert!(matches!(storage.paginated_profiles(0), Err(StorageError::InvalidArgument(_))));
}

#[test]
fn bounds_reflect_loaded_table() {
    let (storage, _temp_dir) = create_test_storage();
    storage.replace_profiles(&create_test_profiles()).unwrap();

    let bounds = storage.profile_bounds().unwrap();
    assert_eq!(bounds.count, 10);
    assert_eq!(bounds.max_depth_m, Some(100.0));
    assert_eq!(bounds.min_sample_id, Some(1));
    assert_eq!(bounds.max_sample_id, Some(10));
}

#[test]
fn concurrent_replace_and_query_never_see_partial_table() {
    let (storage, _temp_dir) = create_test_storage();
    let small = vec![create_test_profile(1, 1.0, 0.0, 0.0)];
    let large = create_test_profiles();
    storage.replace_profiles(&small).unwrap();

    std::thread::scope(|scope| {
        let writer = storage.clone();
        let (small_w, large_w) = (small.clone(), large.clone());
        scope.spawn(move || {
            for i in 0..20 {
                let rows = if i % 2 == 0 { &large_w } else { &small_w };
                writer.replace_profiles(rows).unwrap();
            }
        });
        for _ in 0..4 {
            let reader = storage.clone();
            scope.spawn(move || {
                for _ in 0..20 {
                    let n = reader.query_profiles(&wide_open()).unwrap().len();
                    assert!(n == 1 || n == 10, "observed partial table with {n} rows");
                }
            });
        }
    });
}
