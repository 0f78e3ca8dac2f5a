mod logger;

use crate::Portal;

use cp_config::Config;
use cp_db::{ProfileRepository, connect_in_memory};

pub(crate) async fn in_memory_portal() -> Portal {
    let pool = connect_in_memory().await.unwrap();
    Portal::with_repository(Config::default(), ProfileRepository::new(pool))
}
