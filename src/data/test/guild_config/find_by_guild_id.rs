use super::*;

/// Tests finding a configuration that exists.
///
/// Expected: Ok(Some(config)) with parsed role ids
#[tokio::test]
async fn finds_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123456789")
        .admin_roles(["1001"])
        .forbidden_roles(["2001", "2002"])
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.find_by_guild_id(123456789).await?.unwrap();

    assert_eq!(config.guild_id, 123456789);
    assert_eq!(config.admin_role_ids, vec![1001]);
    assert_eq!(config.forbidden_role_ids, vec![2001, 2002]);

    Ok(())
}

/// Tests finding a configuration for an unknown guild.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unconfigured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.find_by_guild_id(999999999).await?;

    assert!(config.is_none());

    Ok(())
}

/// Tests that the correct configuration is picked among several guilds.
///
/// Expected: Ok(Some(config)) for the requested guild only
#[tokio::test]
async fn finds_correct_config_among_multiple() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (guild_id, role) in [("111", "1"), ("222", "2"), ("333", "3")] {
        factory::guild_config::GuildConfigFactory::new(db)
            .guild_id(guild_id)
            .admin_roles([role])
            .build()
            .await?;
    }

    let repo = GuildConfigRepository::new(db);
    let config = repo.find_by_guild_id(222).await?.unwrap();

    assert_eq!(config.guild_id, 222);
    assert_eq!(config.admin_role_ids, vec![2]);

    Ok(())
}

/// Tests that a row with a corrupt role list surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_malformed_role_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("555")
        .admin_roles(["not-a-snowflake"])
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let result = repo.find_by_guild_id(555).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
