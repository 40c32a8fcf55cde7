use super::*;

/// Tests raising a counter past imported numbers.
///
/// Verifies that assignment continues above the floor after the raise.
///
/// Expected: next value after raising to 5 is 6
#[tokio::test]
async fn raises_counter_below_floor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SequenceRepository::new(db);
    repo.next_value(SequenceName::ReceiptNo).await?;

    repo.raise_to(SequenceName::ReceiptNo, 5).await?;

    assert_eq!(repo.next_value(SequenceName::ReceiptNo).await?, 6);

    Ok(())
}

/// Tests raising to a floor the counter already passed.
///
/// Verifies that the counter never moves backwards.
///
/// Expected: assignment continues from the current value
#[tokio::test]
async fn ignores_lower_floor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SequenceRepository::new(db);
    repo.next_value(SequenceName::ReceiptNo).await?;
    repo.next_value(SequenceName::ReceiptNo).await?;

    repo.raise_to(SequenceName::ReceiptNo, 1).await?;

    assert_eq!(repo.next_value(SequenceName::ReceiptNo).await?, 3);

    Ok(())
}

/// Tests raising a counter that has never been used.
///
/// Verifies that the raise seeds the row directly at the floor.
///
/// Expected: next value after raising to 10 is 11
#[tokio::test]
async fn seeds_missing_counter_at_floor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SequenceRepository::new(db);
    repo.raise_to(SequenceName::SrNo, 10).await?;

    assert_eq!(repo.next_value(SequenceName::SrNo).await?, 11);

    Ok(())
}
