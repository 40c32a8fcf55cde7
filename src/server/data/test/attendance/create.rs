use super::*;

/// Tests creating an attendance ledger.
///
/// Verifies that the head row stores the student and the initial
/// denormalized status.
///
/// Expected: Ok with ledger created
#[tokio::test]
async fn creates_ledger() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_student_with_class(db).await?;

    let marked_at = Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap();
    let repo = AttendanceRepository::new(db);
    let ledger = repo.create(student.id, false, marked_at).await?;

    assert_eq!(ledger.student_id, student.id);
    assert!(!ledger.present);
    assert_eq!(ledger.marked_at, marked_at);

    Ok(())
}

/// Tests the one-ledger-per-student constraint.
///
/// Expected: Err(DbErr) on the second ledger for the same student
#[tokio::test]
async fn rejects_second_ledger_for_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student, _) = factory::helpers::create_student_with_ledger(db).await?;

    let repo = AttendanceRepository::new(db);
    let result = repo.create(student.id, false, Utc::now()).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests looking a ledger up by its student.
///
/// Expected: Ok(Some) for the owning student, Ok(None) for another
#[tokio::test]
async fn finds_ledger_by_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (class, student, ledger) = factory::helpers::create_student_with_ledger(db).await?;
    let other = factory::create_student(db, class.id).await?;

    let repo = AttendanceRepository::new(db);

    assert_eq!(
        repo.get_by_student(student.id).await?.map(|l| l.id),
        Some(ledger.id)
    );
    assert!(repo.get_by_student(other.id).await?.is_none());

    Ok(())
}

/// Tests updating the denormalized head status.
///
/// Expected: Ok with present flag and mark instant replaced
#[tokio::test]
async fn updates_head_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ledger) = factory::helpers::create_student_with_ledger(db).await?;

    let marked_at = Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap();
    let repo = AttendanceRepository::new(db);
    let updated = repo.update_head(ledger.id, true, marked_at).await?;

    assert!(updated.present);
    assert_eq!(updated.marked_at, marked_at);

    Ok(())
}
