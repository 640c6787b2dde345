//! Application use cases and transactions.

mod hero;
mod hero_power;
mod power;
mod seed;

pub use hero::{
    hero_create, hero_delete, hero_get, hero_list, HeroCreateReq, HeroDetailDto, HeroDto,
    HeroPowerWithPowerDto,
};
pub use hero_power::{hero_power_create, HeroPowerCreateReq, HeroPowerDto};
pub use power::{
    power_create, power_delete, power_get, power_list, power_update, PowerCreateReq, PowerDto,
    PowerUpdateReq,
};
pub use seed::{seed_sample_data, SeedReport};
