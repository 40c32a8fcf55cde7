use super::*;

/// Tests counting marked days for a class within a month.
///
/// Verifies that the count joins entries through their ledger to the
/// owning student's class and respects the half-open day range.
///
/// Expected: only in-range entries of the requested class are counted
#[tokio::test]
async fn counts_entries_within_range_by_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (class, _, ledger) = factory::helpers::create_student_with_ledger(db).await?;
    let other_class = factory::create_class(db).await?;
    let other_student = factory::create_student(db, other_class.id).await?;
    let other_ledger = factory::create_ledger(db, other_student.id).await?;

    // Two March entries and one April entry for the class under test.
    factory::create_entry(db, ledger.id, day(2026, 3, 5), true).await?;
    factory::create_entry(db, ledger.id, day(2026, 3, 6), false).await?;
    factory::create_entry(db, ledger.id, day(2026, 4, 1), true).await?;
    // A March entry in another class.
    factory::create_entry(db, other_ledger.id, day(2026, 3, 5), true).await?;

    let repo = AttendanceRepository::new(db);
    let total = repo
        .count_entries_for_class(class.id, day(2026, 3, 1), day(2026, 4, 1))
        .await?;

    assert_eq!(total, 2);

    Ok(())
}

/// Tests counting only present days.
///
/// Expected: absent entries are excluded from the present count
#[tokio::test]
async fn counts_present_entries_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (class, _, ledger) = factory::helpers::create_student_with_ledger(db).await?;

    factory::create_entry(db, ledger.id, day(2026, 3, 5), true).await?;
    factory::create_entry(db, ledger.id, day(2026, 3, 6), false).await?;
    factory::create_entry(db, ledger.id, day(2026, 3, 7), true).await?;

    let repo = AttendanceRepository::new(db);
    let present = repo
        .count_present_for_class(class.id, day(2026, 3, 1), day(2026, 4, 1))
        .await?;

    assert_eq!(present, 2);

    Ok(())
}

/// Tests counting a month with no entries.
///
/// Expected: Ok(0) for both counts
#[tokio::test]
async fn returns_zero_for_empty_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (class, _, _) = factory::helpers::create_student_with_ledger(db).await?;

    let repo = AttendanceRepository::new(db);

    assert_eq!(
        repo.count_entries_for_class(class.id, day(2026, 3, 1), day(2026, 4, 1))
            .await?,
        0
    );
    assert_eq!(
        repo.count_present_for_class(class.id, day(2026, 3, 1), day(2026, 4, 1))
            .await?,
        0
    );

    Ok(())
}
