fn main() {
    fridge_inventory_lib::run()
}
