use crate::{
    data::guild_config::GuildConfigRepository, model::guild_config::CreateGuildConfigParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_guild_id;
mod find_by_guild_id;
mod set_roles;
