mod pods_test;
mod util_test;

use ec_testutils::*;
use rstest::*;

use super::*;
