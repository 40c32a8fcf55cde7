use super::*;

/// Tests updating a student's fee plan.
///
/// Verifies that the new total and monthly fee are stored and every other
/// field is left untouched.
///
/// Expected: Ok with both fee amounts updated
#[tokio::test]
async fn updates_fee_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_class(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update_fee_plan(student.id, Decimal::from(2400), Decimal::from(200))
        .await?;

    assert_eq!(updated.total_fee, Decimal::from(2400));
    assert_eq!(updated.monthly_fee, Decimal::from(200));
    assert_eq!(updated.name, student.name);

    Ok(())
}

/// Tests updating a student that doesn't exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo
        .update_fee_plan(999999, Decimal::from(2400), Decimal::from(200))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
