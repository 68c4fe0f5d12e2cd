use plateau_mowers::{MowerError, MowerService, SequentialIdGenerator};

#[test]
fn test_each_created_mower_gets_its_own_plateau() {
    let mut service = MowerService::new();
    let first = service.create_mower("N", &[1, 1], &[5, 5]).unwrap();
    let second = service.create_mower("N", &[1, 1], &[5, 5]).unwrap();

    assert_ne!(first, second);
    assert_eq!(service.plateau_count(), 2);

    service.send_instructions(&first, "M").unwrap();
    service.send_instructions(&second, "M").unwrap();
    assert_eq!(service.get_mower_status(&first).unwrap(), "1 2 N");
    assert_eq!(service.get_mower_status(&second).unwrap(), "1 2 N");
}

#[test]
fn test_reference_mowers_one_by_one() {
    let mut service = MowerService::with_id_generator(SequentialIdGenerator::starting_at(100));
    let plateau = service.create_plateau(&[5, 5]).unwrap();

    let a = service.create_mower_on_plateau(plateau, "N", &[1, 2]).unwrap();
    service.send_instructions(&a, "LMLMLMLMM").unwrap();
    let b = service.create_mower_on_plateau(plateau, "E", &[3, 3]).unwrap();
    service.send_instructions(&b, "MMRMMRMRRM").unwrap();

    assert_eq!(a, "00000000-0000-0000-0000-000000000064");
    assert_eq!(service.get_mower_status(&a).unwrap(), "1 3 N");
    assert_eq!(service.get_mower_status(&b).unwrap(), "5 1 E");
}

#[test]
fn test_lookup_failures_do_not_mutate() {
    let mut service = MowerService::new();
    let mower = service.create_mower("E", &[0, 0], &[3, 3]).unwrap();

    assert!(matches!(
        service.send_instructions("7d558c83-abbc-4614-8832-8b2b452f9288", "MMM"),
        Err(MowerError::MowerNotFound { .. })
    ));
    assert!(matches!(
        service.send_instructions("", "MMM"),
        Err(MowerError::MowerNotFound { .. })
    ));
    assert_eq!(service.get_mower_status(&mower).unwrap(), "0 0 E");
}

#[test]
fn test_failed_move_keeps_mower_in_place() {
    let mut service = MowerService::new();
    let mower = service.create_mower("N", &[5, 5], &[5, 5]).unwrap();

    let err = service.send_instructions(&mower, "RM M").unwrap_err();
    assert!(matches!(err, MowerError::InvalidArgument { .. }));

    let err = service.send_instructions(&mower, "M").unwrap_err();
    assert!(matches!(err, MowerError::OutOfBounds { .. }));

    let status = service.mower_status(&mower).unwrap();
    assert_eq!(status.to_string(), "5 5 N");
}
