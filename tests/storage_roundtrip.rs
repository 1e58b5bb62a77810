use business_categories::storage::{read_array, read_array_as, write_array, Element, ElementType, NumericArray};
use business_categories::DataError;

fn round_trip<T: Element>(values: &[T]) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("values.nz");
    write_array(values, &path).unwrap();
    assert_eq!(
        std::fs::metadata(&path).unwrap().len() as usize,
        values.len() * T::WIDTH
    );
    let back: Vec<T> = read_array(&path).unwrap();
    assert_eq!(back, values);
}

#[test]
fn every_element_type_round_trips() {
    round_trip(&[i8::MIN, -1, 0, 1, i8::MAX]);
    round_trip(&[i16::MIN, -300, 0, 300, i16::MAX]);
    round_trip(&[i32::MIN, -70_000, 0, 70_000, i32::MAX]);
    round_trip(&[i64::MIN, -5_000_000_000, 0, i64::MAX]);
    round_trip(&[0u8, 7, u8::MAX]);
    round_trip(&[0u16, 513, u16::MAX]);
    round_trip(&[0u32, 1 << 20, u32::MAX]);
    round_trip(&[0u64, 1 << 40, u64::MAX]);
    round_trip(&[-1.5f32, 0.0, 3.25, f32::MAX]);
    round_trip(&[-1.5f64, 0.0, 4.5, f64::MIN_POSITIVE]);
}

#[test]
fn dynamic_read_matches_written_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stars.nz");
    let arr = NumericArray::from(vec![4.5f32, 4.0, 3.5]);
    arr.write_to(&path).unwrap();

    let back = read_array_as(&path, "float32".parse().unwrap()).unwrap();
    assert_eq!(back, arr);
    assert_eq!(back.element_type(), ElementType::F32);
}

#[test]
fn mismatched_type_reinterprets_silently() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ids.nz");
    write_array(&[1i32, 2, 3, 4], &path).unwrap();

    let wrong: Vec<i64> = read_array(&path).unwrap();
    assert_eq!(wrong.len(), 2);
    assert_ne!(wrong, vec![1, 2, 3, 4]);
    assert_ne!(wrong[0], 1);

    let same_width: Vec<f32> = read_array(&path).unwrap();
    assert_eq!(same_width.len(), 4);
    assert_ne!(same_width[0], 1.0);
}

#[test]
fn length_not_multiple_of_width_is_size_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ids.nz");
    write_array(&[1i32, 2, 3], &path).unwrap();

    match read_array_as(&path, ElementType::I64) {
        Err(DataError::SizeMismatch { len, width, .. }) => {
            assert_eq!(len, 12);
            assert_eq!(width, 8);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_array::<u8>(dir.path().join("absent.nz")).unwrap_err();
    assert!(matches!(err, DataError::NotFound { .. }));
}
