fn main() {
    workdesk_frontend::start();
}
