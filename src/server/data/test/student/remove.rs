use super::*;

/// Tests deleting a student.
///
/// Verifies that the student row is gone after deletion.
///
/// Expected: Ok with student no longer found
#[tokio::test]
async fn deletes_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_class(db).await?;

    let repo = StudentRepository::new(db);
    repo.delete(student.id).await?;

    assert!(repo.get_by_id(student.id).await?.is_none());

    Ok(())
}

/// Tests cascade deletion of dependent rows.
///
/// Verifies that deleting a student removes their fee records and month
/// dues through the cascading foreign keys.
///
/// Expected: Ok with no fee rows left for the student
#[tokio::test]
async fn cascades_to_fee_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_class(db).await?;
    factory::create_fee_record(db, student.id).await?;

    let repo = StudentRepository::new(db);
    repo.delete(student.id).await?;

    let records = entity::prelude::FeeRecord::find()
        .filter(entity::fee_record::Column::StudentId.eq(student.id))
        .all(db)
        .await?;
    assert!(records.is_empty());

    Ok(())
}

/// Tests deleting a student that doesn't exist.
///
/// Verifies that deletion of a missing ID is not an error.
///
/// Expected: Ok
#[tokio::test]
async fn deleting_missing_student_is_ok() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.delete(999999).await;

    assert!(result.is_ok());

    Ok(())
}
