use super::*;

/// Tests the first mark for a day.
///
/// Expected: Ok with one entry inserted
#[tokio::test]
async fn inserts_first_mark_for_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ledger) = factory::helpers::create_student_with_ledger(db).await?;

    let marked_at = Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap();
    let repo = AttendanceRepository::new(db);
    let entry = repo
        .upsert_day(ledger.id, day(2026, 3, 5), true, marked_at)
        .await?;

    assert_eq!(entry.attendance_id, ledger.id);
    assert_eq!(entry.day, day(2026, 3, 5));
    assert!(entry.present);
    assert_eq!(entry.marked_at, marked_at);

    Ok(())
}

/// Tests re-marking the same day.
///
/// Verifies that the second mark updates the existing entry in place
/// instead of appending a second row for the day.
///
/// Expected: Ok with exactly one entry holding the newer mark
#[tokio::test]
async fn updates_mark_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ledger) = factory::helpers::create_student_with_ledger(db).await?;

    let morning = Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap();
    let noon = Utc.with_ymd_and_hms(2026, 3, 5, 12, 0, 0).unwrap();
    let repo = AttendanceRepository::new(db);
    repo.upsert_day(ledger.id, day(2026, 3, 5), true, morning)
        .await?;
    let updated = repo
        .upsert_day(ledger.id, day(2026, 3, 5), false, noon)
        .await?;

    assert!(!updated.present);
    assert_eq!(updated.marked_at, noon);

    let entries = repo.entries_for(ledger.id).await?;
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].present);

    Ok(())
}

/// Tests marks on different days.
///
/// Verifies that entries accumulate one per day, ordered by day.
///
/// Expected: Ok with two entries in day order
#[tokio::test]
async fn keeps_days_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ledger) = factory::helpers::create_student_with_ledger(db).await?;

    let repo = AttendanceRepository::new(db);
    repo.upsert_day(
        ledger.id,
        day(2026, 3, 6),
        false,
        Utc.with_ymd_and_hms(2026, 3, 6, 8, 0, 0).unwrap(),
    )
    .await?;
    repo.upsert_day(
        ledger.id,
        day(2026, 3, 5),
        true,
        Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap(),
    )
    .await?;

    let entries = repo.entries_for(ledger.id).await?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].day, day(2026, 3, 5));
    assert_eq!(entries[1].day, day(2026, 3, 6));

    Ok(())
}

/// Tests that ledgers do not share day entries.
///
/// Expected: Ok with each ledger holding only its own entry
#[tokio::test]
async fn scopes_entries_to_ledger() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (class, _, first) = factory::helpers::create_student_with_ledger(db).await?;
    let other_student = factory::create_student(db, class.id).await?;
    let second = factory::create_ledger(db, other_student.id).await?;

    let repo = AttendanceRepository::new(db);
    repo.upsert_day(
        first.id,
        day(2026, 3, 5),
        true,
        Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap(),
    )
    .await?;
    repo.upsert_day(
        second.id,
        day(2026, 3, 5),
        false,
        Utc.with_ymd_and_hms(2026, 3, 5, 8, 5, 0).unwrap(),
    )
    .await?;

    let first_entries = repo.entries_for(first.id).await?;
    let second_entries = repo.entries_for(second.id).await?;

    assert_eq!(first_entries.len(), 1);
    assert!(first_entries[0].present);
    assert_eq!(second_entries.len(), 1);
    assert!(!second_entries[0].present);

    Ok(())
}
