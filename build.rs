fn main() {
    // Generate the product-term parser used by the equation module
    lalrpop::process_root().unwrap();
}
