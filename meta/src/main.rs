fn main() {
    multiversx_sc_meta_lib::cli_main::<department_voting::AbiProvider>();
}
