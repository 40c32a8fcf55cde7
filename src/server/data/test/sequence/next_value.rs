use super::*;

/// Tests first use of a counter.
///
/// Verifies that an unseeded counter hands out 1.
///
/// Expected: Ok(1)
#[tokio::test]
async fn seeds_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SequenceRepository::new(db);
    let value = repo.next_value(SequenceName::ReceiptNo).await?;

    assert_eq!(value, 1);

    Ok(())
}

/// Tests repeated assignment.
///
/// Verifies that consecutive calls produce consecutive values.
///
/// Expected: Ok(1), Ok(2), Ok(3)
#[tokio::test]
async fn increments_monotonically() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SequenceRepository::new(db);

    assert_eq!(repo.next_value(SequenceName::ReceiptNo).await?, 1);
    assert_eq!(repo.next_value(SequenceName::ReceiptNo).await?, 2);
    assert_eq!(repo.next_value(SequenceName::ReceiptNo).await?, 3);

    Ok(())
}

/// Tests counter independence.
///
/// Verifies that the receipt and serial counters advance separately.
///
/// Expected: receipts 1, 2 and serial 1
#[tokio::test]
async fn counters_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SequenceRepository::new(db);

    assert_eq!(repo.next_value(SequenceName::ReceiptNo).await?, 1);
    assert_eq!(repo.next_value(SequenceName::ReceiptNo).await?, 2);
    assert_eq!(repo.next_value(SequenceName::SrNo).await?, 1);

    Ok(())
}

/// Tests assignment under concurrent callers.
///
/// Each task takes its number inside its own transaction. No two tasks may
/// observe the same value and the assigned set must be dense.
///
/// Expected: values are exactly 1 through 8
#[tokio::test]
async fn assigns_distinct_values_to_concurrent_callers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let db = db.clone();
        handles.push(tokio::spawn(async move {
            let txn = db.begin().await?;
            let value = SequenceRepository::new(&txn)
                .next_value(SequenceName::ReceiptNo)
                .await?;
            txn.commit().await?;
            Ok::<i64, DbErr>(value)
        }));
    }

    let mut values = Vec::new();
    for handle in handles {
        values.push(handle.await.unwrap()?);
    }

    values.sort_unstable();
    assert_eq!(values, (1..=8).collect::<Vec<i64>>());

    Ok(())
}
