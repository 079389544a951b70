// Centralized paths & usage strings
pub const DEFAULT_HEADER_PATH: &str = "lib/user_defines.h";
pub const USAGE: &str = "change-defines -i <ifft_option> -n <ntt_option> \
                         -m <index_map_option> -s <sk_option> -d <data_load_option>";
