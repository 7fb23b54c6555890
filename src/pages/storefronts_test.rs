use super::*;

#[test]
fn product_count_is_pluralized() {
    assert_eq!(product_count_label(0), "0 products");
    assert_eq!(product_count_label(1), "1 product");
    assert_eq!(product_count_label(12), "12 products");
}
