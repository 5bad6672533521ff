use super::*;

/// Tests removing an existing configuration.
///
/// Expected: Ok(Some(removed)) and the row is gone
#[tokio::test]
async fn deletes_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let removed = repo.delete_by_guild_id(123).await?;

    assert_eq!(removed.map(|config| config.guild_id), Some(123));
    assert!(repo.find_by_guild_id(123).await?.is_none());

    Ok(())
}

/// Tests removing a configuration that never existed.
///
/// Expected: Ok(None) and other rows untouched
#[tokio::test]
async fn returns_none_for_unconfigured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db).await?;

    let repo = GuildConfigRepository::new(db);
    let removed = repo.delete_by_guild_id(987654321).await?;

    assert!(removed.is_none());
    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
