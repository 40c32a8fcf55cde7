use super::*;

/// Tests inserting then overwriting a tracked month.
///
/// Verifies that the second write for the same student and month updates
/// the existing row instead of adding another one.
///
/// Expected: Ok with a single row holding the newer amount
#[tokio::test]
async fn inserts_then_updates_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_class(db).await?;

    let repo = MonthDueRepository::new(db);
    repo.upsert(student.id, FeeMonth::January, Decimal::from(100))
        .await?;
    let updated = repo
        .upsert(student.id, FeeMonth::January, Decimal::ZERO)
        .await?;

    assert_eq!(updated.due_amount, Decimal::ZERO);

    let rows = entity::prelude::MonthDue::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Tests that tracked months are independent per month and student.
///
/// Expected: Ok with each row holding its own amount
#[tokio::test]
async fn tracks_months_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (class, student) = factory::helpers::create_student_with_class(db).await?;
    let other = factory::create_student(db, class.id).await?;

    let repo = MonthDueRepository::new(db);
    repo.upsert(student.id, FeeMonth::January, Decimal::from(100))
        .await?;
    repo.upsert(student.id, FeeMonth::February, Decimal::from(40))
        .await?;
    repo.upsert(other.id, FeeMonth::January, Decimal::from(75))
        .await?;

    let january = repo.get(student.id, FeeMonth::January).await?;
    let february = repo.get(student.id, FeeMonth::February).await?;

    assert_eq!(january.map(|row| row.due_amount), Some(Decimal::from(100)));
    assert_eq!(february.map(|row| row.due_amount), Some(Decimal::from(40)));

    let tracked = entity::prelude::MonthDue::find().count(db).await?;
    assert_eq!(tracked, 3);

    Ok(())
}

/// Tests reading a month that has never been tracked.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_untracked_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_class(db).await?;

    let repo = MonthDueRepository::new(db);

    assert!(repo.get(student.id, FeeMonth::June).await?.is_none());

    Ok(())
}
