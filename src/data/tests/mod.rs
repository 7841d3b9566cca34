mod agency;
mod route;
mod situation;
mod stop;
mod trip;
mod trip_details;

use obakit_test_utils::prelude::*;
