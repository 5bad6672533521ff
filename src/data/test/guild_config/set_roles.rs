use super::*;

/// Tests replacing administrator roles.
///
/// Expected: Ok(Some(config)) with new admin roles and forbidden roles untouched
#[tokio::test]
async fn replaces_admin_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("77")
        .admin_roles(["1"])
        .forbidden_roles(["9"])
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let updated = repo.set_admin_roles(77, &[2, 3]).await?.unwrap();

    assert_eq!(updated.admin_role_ids, vec![2, 3]);
    assert_eq!(updated.forbidden_role_ids, vec![9]);
    assert!(updated.updated_at >= updated.created_at);

    Ok(())
}

/// Tests replacing forbidden roles.
///
/// Expected: Ok(Some(config)) with new forbidden roles
#[tokio::test]
async fn replaces_forbidden_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("78")
        .forbidden_roles(["9"])
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let updated = repo.set_forbidden_roles(78, &[]).await?.unwrap();

    assert!(updated.forbidden_role_ids.is_empty());

    Ok(())
}

/// Tests that updating roles of an unconfigured guild creates nothing.
///
/// Expected: Ok(None) and no rows
#[tokio::test]
async fn ignores_unconfigured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert!(repo.set_admin_roles(1, &[2]).await?.is_none());
    assert!(repo.set_forbidden_roles(1, &[2]).await?.is_none());
    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
