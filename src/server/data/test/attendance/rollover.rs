use super::*;

/// Tests defaulting stale heads to absent.
///
/// Verifies that only heads marked before the cutoff flip; heads marked on
/// the current day keep their status.
///
/// Expected: Ok(1) with the stale head absent and the fresh head untouched
#[tokio::test]
async fn defaults_stale_heads_to_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (class, _, stale) = factory::helpers::create_student_with_ledger(db).await?;
    let fresh_student = factory::create_student(db, class.id).await?;
    let fresh = factory::create_ledger(db, fresh_student.id).await?;

    let cutoff = Utc.with_ymd_and_hms(2026, 3, 6, 0, 0, 0).unwrap();
    let repo = AttendanceRepository::new(db);
    repo.update_head(
        stale.id,
        true,
        Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap(),
    )
    .await?;
    repo.update_head(
        fresh.id,
        true,
        Utc.with_ymd_and_hms(2026, 3, 6, 8, 0, 0).unwrap(),
    )
    .await?;

    let flipped = repo.rollover_stale(cutoff).await?;

    assert_eq!(flipped, 1);
    let stale_head = entity::prelude::Attendance::find_by_id(stale.id)
        .one(db)
        .await?
        .unwrap();
    let fresh_head = entity::prelude::Attendance::find_by_id(fresh.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stale_head.present);
    assert!(fresh_head.present);

    Ok(())
}

/// Tests rollover idempotence.
///
/// Verifies that a second run over the same cutoff finds nothing to flip
/// and leaves the ledger state unchanged.
///
/// Expected: second run flips 0 heads
#[tokio::test]
async fn running_twice_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ledger) = factory::helpers::create_student_with_ledger(db).await?;

    let cutoff = Utc.with_ymd_and_hms(2026, 3, 6, 0, 0, 0).unwrap();
    let repo = AttendanceRepository::new(db);
    repo.update_head(
        ledger.id,
        true,
        Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap(),
    )
    .await?;

    assert_eq!(repo.rollover_stale(cutoff).await?, 1);
    assert_eq!(repo.rollover_stale(cutoff).await?, 0);

    let head = entity::prelude::Attendance::find_by_id(ledger.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!head.present);

    Ok(())
}

/// Tests that rollover never rewrites history.
///
/// Verifies that day-level entries and the head's mark instant survive the
/// rollover untouched; only the denormalized flag flips.
///
/// Expected: entry still present, mark instant unchanged
#[tokio::test]
async fn leaves_entries_and_mark_instant_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ledger) = factory::helpers::create_student_with_ledger(db).await?;

    let marked_at = Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap();
    let repo = AttendanceRepository::new(db);
    repo.upsert_day(ledger.id, day(2026, 3, 5), true, marked_at)
        .await?;
    repo.update_head(ledger.id, true, marked_at).await?;

    repo.rollover_stale(Utc.with_ymd_and_hms(2026, 3, 6, 0, 0, 0).unwrap())
        .await?;

    let entries = repo.entries_for(ledger.id).await?;
    assert_eq!(entries.len(), 1);
    assert!(entries[0].present);

    let head = entity::prelude::Attendance::find_by_id(ledger.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!head.present);
    assert_eq!(head.marked_at, marked_at);

    Ok(())
}
