fn main() {
    leavekeeper_frontend::boot();
}
