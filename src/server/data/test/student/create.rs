use super::*;

/// Tests creating a new student.
///
/// Verifies that the repository stores the registration fields and the
/// derived monthly fee exactly as given.
///
/// Expected: Ok with student created
#[tokio::test]
async fn creates_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .create(CreateStudentParams {
            class_id: class.id,
            name: "Asha Verma".to_string(),
            guardian_phone: Some("+15550001111".to_string()),
            guardian_email: Some("guardian@example.com".to_string()),
            total_fee: Decimal::from(1200),
            monthly_fee: Decimal::from(100),
        })
        .await;

    assert!(result.is_ok());
    let student = result.unwrap();
    assert_eq!(student.class_id, class.id);
    assert_eq!(student.name, "Asha Verma");
    assert_eq!(student.guardian_phone, Some("+15550001111".to_string()));
    assert_eq!(student.total_fee, Decimal::from(1200));
    assert_eq!(student.monthly_fee, Decimal::from(100));

    Ok(())
}

/// Tests creating a student without guardian contacts.
///
/// Verifies that both contact fields may be absent.
///
/// Expected: Ok with student created with no contacts
#[tokio::test]
async fn creates_student_without_contacts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            class_id: class.id,
            name: "Ravi Anand".to_string(),
            guardian_phone: None,
            guardian_email: None,
            total_fee: Decimal::from(1200),
            monthly_fee: Decimal::from(100),
        })
        .await?;

    assert!(student.guardian_phone.is_none());
    assert!(student.guardian_email.is_none());

    Ok(())
}

/// Tests foreign key constraint on class_id.
///
/// Verifies that the repository returns an error when attempting to create
/// a student in a class that doesn't exist in the database.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo
        .create(CreateStudentParams {
            class_id: 999999, // Non-existent class
            name: "No Class".to_string(),
            guardian_phone: None,
            guardian_email: None,
            total_fee: Decimal::from(1200),
            monthly_fee: Decimal::from(100),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests listing all students in ID order.
///
/// Verifies that `get_all` returns every student ordered by ID ascending.
///
/// Expected: Ok with both students in insertion order
#[tokio::test]
async fn gets_all_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let first = factory::create_student(db, class.id).await?;
    let second = factory::create_student(db, class.id).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id, first.id);
    assert_eq!(students[1].id, second.id);

    Ok(())
}
