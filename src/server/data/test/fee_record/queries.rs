use super::*;

/// Tests fetching the most recently created record.
///
/// Verifies that `latest_for_student` picks the record with the newest
/// creation time regardless of insert order.
///
/// Expected: Ok(Some) with the newest record
#[tokio::test]
async fn finds_latest_by_creation_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_class(db).await?;

    let now = Utc::now();
    let newest = FeeRecordFactory::new(db, student.id)
        .fee_month(FeeMonth::February)
        .created_at(now)
        .build()
        .await?;
    FeeRecordFactory::new(db, student.id)
        .created_at(now - Duration::days(30))
        .build()
        .await?;

    let repo = FeeRecordRepository::new(db);
    let latest = repo.latest_for_student(student.id).await?;

    assert_eq!(latest.map(|r| r.id), Some(newest.id));

    Ok(())
}

/// Tests that records of other students are ignored.
///
/// Expected: Ok(None) for a student with no records
#[tokio::test]
async fn latest_ignores_other_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (class, paying) = factory::helpers::create_student_with_class(db).await?;
    let other = factory::create_student(db, class.id).await?;
    factory::create_fee_record(db, paying.id).await?;

    let repo = FeeRecordRepository::new(db);

    assert!(repo.latest_for_student(other.id).await?.is_none());

    Ok(())
}

/// Tests the settled-record lookup used for carry-forward credit.
///
/// Verifies that only fully settled records in the requested month are
/// considered and that ties go to the most recently created one.
///
/// Expected: Ok(Some) with the newest settled January record
#[tokio::test]
async fn finds_latest_settled_in_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_class(db).await?;

    let now = Utc::now();
    // Older settled record, newer settled record, and an unsettled one.
    FeeRecordFactory::new(db, student.id)
        .extra_fee(Decimal::from(10))
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newest_settled = FeeRecordFactory::new(db, student.id)
        .extra_fee(Decimal::from(50))
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    FeeRecordFactory::new(db, student.id)
        .fee_paid(Decimal::from(60))
        .due_amount(Decimal::from(40))
        .status(FeeStatus::Due)
        .created_at(now)
        .build()
        .await?;

    let repo = FeeRecordRepository::new(db);
    let settled = repo
        .latest_settled_in_month(student.id, FeeMonth::January)
        .await?;

    assert_eq!(settled.map(|r| r.id), Some(newest_settled.id));

    Ok(())
}

/// Tests the settled-record lookup against a month with only unsettled records.
///
/// Expected: Ok(None)
#[tokio::test]
async fn settled_lookup_skips_unsettled_months() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_class(db).await?;
    FeeRecordFactory::new(db, student.id)
        .fee_paid(Decimal::from(60))
        .due_amount(Decimal::from(40))
        .status(FeeStatus::Due)
        .build()
        .await?;

    let repo = FeeRecordRepository::new(db);
    let settled = repo
        .latest_settled_in_month(student.id, FeeMonth::January)
        .await?;

    assert!(settled.is_none());

    Ok(())
}

/// Tests the month-existence check behind the daily dues scan.
///
/// Expected: Ok(true) for a month with a record, Ok(false) otherwise
#[tokio::test]
async fn checks_record_existence_per_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_class(db).await?;
    factory::create_fee_record(db, student.id).await?;

    let repo = FeeRecordRepository::new(db);

    assert!(repo.exists_for_month(student.id, FeeMonth::January).await?);
    assert!(!repo.exists_for_month(student.id, FeeMonth::February).await?);

    Ok(())
}

/// Tests reading the highest assigned numbers.
///
/// Verifies that the maxima track the two counters independently and are
/// absent on an empty table.
///
/// Expected: Ok with the highest receipt and serial numbers
#[tokio::test]
async fn reads_highest_assigned_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeeRecordRepository::new(db);
    assert_eq!(repo.max_receipt_no().await?, None);
    assert_eq!(repo.max_sr_no().await?, None);

    let (_, student) = factory::helpers::create_student_with_class(db).await?;
    repo.create(settled_params(student.id, 5, 17)).await?;
    repo.create({
        let mut params = settled_params(student.id, 9, 12);
        params.fee_month = FeeMonth::February;
        params
    })
    .await?;

    assert_eq!(repo.max_receipt_no().await?, Some(9));
    assert_eq!(repo.max_sr_no().await?, Some(17));

    Ok(())
}
