use super::*;

/// Tests partial updates leaving other fields untouched.
///
/// Expected: Ok(CinemaHall) with new name and original capacity
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::cinema_hall::CinemaHallFactory::new(db)
        .name("Old Name")
        .capacity(40)
        .build()
        .await?;

    let repo = CinemaHallRepository::new(db);
    let updated = repo
        .update(UpdateCinemaHallParam {
            hall_id: created.hall_id,
            name: Some("New Name".to_string()),
            location: None,
            capacity: None,
        })
        .await?;

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.capacity, 40);

    Ok(())
}
