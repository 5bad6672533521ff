use super::*;

/// Tests creating a configuration for a new guild.
///
/// Expected: Ok with the stored configuration and matching timestamps
#[tokio::test]
async fn creates_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .create(CreateGuildConfigParam {
            guild_id: 123456789,
            admin_role_ids: vec![10],
            forbidden_role_ids: vec![],
        })
        .await?;

    assert_eq!(config.guild_id, 123456789);
    assert_eq!(config.admin_role_ids, vec![10]);
    assert!(config.forbidden_role_ids.is_empty());
    assert_eq!(config.created_at, config.updated_at);

    let stored = repo.find_by_guild_id(123456789).await?.unwrap();
    assert_eq!(stored, config);

    Ok(())
}

/// Tests that the unique index rejects a second configuration for the same guild.
///
/// Expected: Err on second insert, one row left
#[tokio::test]
async fn rejects_duplicate_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.create(CreateGuildConfigParam {
        guild_id: 42,
        ..Default::default()
    })
    .await?;

    let result = repo
        .create(CreateGuildConfigParam {
            guild_id: 42,
            ..Default::default()
        })
        .await;

    assert!(result.is_err());
    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
