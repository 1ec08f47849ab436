
use ec_testutils::*;
use rstest::*;

use super::*;
