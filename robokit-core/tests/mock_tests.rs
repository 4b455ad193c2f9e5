use core::cell::RefCell;

use embedded_hal::i2c::ErrorKind;
use embedded_hal_bus::i2c::RefCellDevice;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use pwm_pca9685::{Address as PwmAddress, Pca9685};
use robokit_core::utils::{
    ConsoleSpeaker, DriveCommand, MotorDriver, PwmMotorDriver, Robot, RobotConfig, RobotError,
    SimulatedRangeSensor,
};

/// Default I2C address of the kit's PWM motor hat.
pub const PWM_ADDRESS: u8 = 0x55;

/// Create a write transaction for the given I2C address and data payload.
pub fn write(
    addr: u8,
    data: Vec<u8>,
) -> I2cTrans {
    I2cTrans::write(addr, data)
}

/// MODE1 write turning on register auto-increment before the first channel write.
fn auto_increment(mode1: u8) -> I2cTrans {
    write(PWM_ADDRESS, vec![0x00, mode1])
}

/// Channel write: `[LEDn_ON_L, on_l, on_h, off_l, off_h]`.
fn channel(
    register: u8,
    off: u16,
) -> I2cTrans {
    let [lo, hi] = off.to_le_bytes();
    write(PWM_ADDRESS, vec![register, 0x00, 0x00, lo, hi])
}

/// Full-on write touching only `LEDn_ON_L`/`LEDn_ON_H` (bit 12 set).
fn full_on(register: u8) -> I2cTrans {
    write(PWM_ADDRESS, vec![register, 0x00, 0x10])
}

// LEDn_ON_L registers for the default wiring.
const LEFT_PHASE: u8 = 0x1E; // C6
const LEFT_ENABLE: u8 = 0x22; // C7
const RIGHT_PHASE: u8 = 0x0E; // C2
const RIGHT_ENABLE: u8 = 0x12; // C3

fn quiet_config() -> RobotConfig {
    RobotConfig {
        say_hello_on_start: false,
        ..RobotConfig::default()
    }
}

fn driver(bus: &RefCell<I2cMock>) -> PwmMotorDriver<RefCellDevice<'_, I2cMock>> {
    let pwm = Pca9685::new(RefCellDevice::new(bus), PwmAddress::from(PWM_ADDRESS)).unwrap();
    PwmMotorDriver::new(pwm)
}

#[test]
fn test_configure_pwm() {
    // Enable, then prescale (sleep, write prescale, wake).
    let expectations = [
        write(PWM_ADDRESS, vec![0x00, 0x01]),
        write(PWM_ADDRESS, vec![0x00, 0x11]),
        write(PWM_ADDRESS, vec![0xFE, 100]),
        write(PWM_ADDRESS, vec![0x00, 0x01]),
    ];

    let i2c_bus = RefCell::new(I2cMock::new(&expectations));
    let mut motors = driver(&i2c_bus);
    motors.configure().unwrap();
    let _pwm = motors.release();
    i2c_bus.borrow_mut().done();
}

#[test]
fn test_stop_after_configure_writes_zero_duty() {
    let expectations = [
        write(PWM_ADDRESS, vec![0x00, 0x01]),
        write(PWM_ADDRESS, vec![0x00, 0x11]),
        write(PWM_ADDRESS, vec![0xFE, 100]),
        write(PWM_ADDRESS, vec![0x00, 0x01]),
        auto_increment(0x21),
        channel(LEFT_PHASE, 0),
        channel(LEFT_ENABLE, 0),
        channel(RIGHT_PHASE, 0),
        channel(RIGHT_ENABLE, 0),
    ];

    let i2c_bus = RefCell::new(I2cMock::new(&expectations));
    let mut motors = driver(&i2c_bus);
    motors.configure().unwrap();
    let command = motors.stop().unwrap();
    assert_eq!(motors.last_command(), Some(&command));
    i2c_bus.borrow_mut().done();
}

#[test]
fn test_forward_then_stop_through_robot() {
    // Auto-increment is switched on once, before the first channel write.
    let expectations = [
        auto_increment(0x31),
        channel(LEFT_PHASE, 0),
        channel(LEFT_ENABLE, 2047),
        channel(RIGHT_PHASE, 0),
        channel(RIGHT_ENABLE, 2047),
        channel(LEFT_PHASE, 0),
        channel(LEFT_ENABLE, 0),
        channel(RIGHT_PHASE, 0),
        channel(RIGHT_ENABLE, 0),
    ];

    let i2c_bus = RefCell::new(I2cMock::new(&expectations));
    let mut robot = Robot::with_collaborators(
        quiet_config(),
        driver(&i2c_bus),
        SimulatedRangeSensor::new(),
        ConsoleSpeaker::new(Vec::new()),
    )
    .unwrap();

    robot.move_forward(Some(1.5), None).unwrap();
    assert!(robot.state().is_moving);
    assert_eq!(robot.motor().last_command(), Some(&DriveCommand::drive(0.5, Some(1.5))));

    robot.stop().unwrap();
    assert!(!robot.state().is_moving);
    assert_eq!(robot.motor().last_command(), Some(&DriveCommand::stop()));
    i2c_bus.borrow_mut().done();
}

#[test]
fn test_right_turn_reverses_right_wheel() {
    let expectations = [
        auto_increment(0x31),
        channel(LEFT_PHASE, 0),
        channel(LEFT_ENABLE, 2047),
        full_on(RIGHT_PHASE),
        channel(RIGHT_ENABLE, 2047),
    ];

    let i2c_bus = RefCell::new(I2cMock::new(&expectations));
    let mut robot = Robot::with_collaborators(
        quiet_config(),
        driver(&i2c_bus),
        SimulatedRangeSensor::new(),
        ConsoleSpeaker::new(Vec::new()),
    )
    .unwrap();

    robot.turn(-45.0, Some(0.5)).unwrap();
    assert_eq!(robot.motor().last_command(), Some(&DriveCommand::turn(-0.5, None)));
    assert_eq!(
        String::from_utf8_lossy(robot.speaker().get_ref()),
        "[Robot] Turning right 45 degrees.\n"
    );
    i2c_bus.borrow_mut().done();
}

#[test]
fn test_backward_sets_phase_channels() {
    let expectations = [
        auto_increment(0x31),
        full_on(LEFT_PHASE),
        channel(LEFT_ENABLE, 2047),
        full_on(RIGHT_PHASE),
        channel(RIGHT_ENABLE, 2047),
    ];

    let i2c_bus = RefCell::new(I2cMock::new(&expectations));
    let mut motors = driver(&i2c_bus);
    motors.drive(-0.5, None).unwrap();
    i2c_bus.borrow_mut().done();
}

#[test]
fn test_reverse_then_forward_clears_full_on_phase() {
    // A full on/off write of the phase channel resets the full-on bit.
    let expectations = [
        auto_increment(0x31),
        full_on(LEFT_PHASE),
        channel(LEFT_ENABLE, 2047),
        full_on(RIGHT_PHASE),
        channel(RIGHT_ENABLE, 2047),
        channel(LEFT_PHASE, 0),
        channel(LEFT_ENABLE, 2047),
        channel(RIGHT_PHASE, 0),
        channel(RIGHT_ENABLE, 2047),
    ];

    let i2c_bus = RefCell::new(I2cMock::new(&expectations));
    let mut motors = driver(&i2c_bus);
    motors.drive(-0.5, None).unwrap();
    motors.drive(0.5, None).unwrap();
    i2c_bus.borrow_mut().done();
}

#[test]
fn test_bus_failure_surfaces_as_motor_error() {
    let expectations = [auto_increment(0x31).with_error(ErrorKind::Other)];

    let i2c_bus = RefCell::new(I2cMock::new(&expectations));
    let mut robot = Robot::with_collaborators(
        quiet_config(),
        driver(&i2c_bus),
        SimulatedRangeSensor::new(),
        ConsoleSpeaker::new(Vec::new()),
    )
    .unwrap();

    let err = robot.move_forward(None, None).unwrap_err();
    assert!(matches!(err, RobotError::Motor(_)), "unexpected error: {err:?}");
    assert!(robot.motor().last_command().is_none());
    i2c_bus.borrow_mut().done();
}
