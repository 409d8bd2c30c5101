pub mod a001_order;
pub mod a002_vendor;
pub mod a003_pharmacy;
pub mod a004_medicine;
pub mod a005_category;
pub mod a006_booking;
pub mod a007_coupon;
