//! Default values and fixed build conventions

/// Build manifest file expected in every buildable directory
pub const BUILD_MANIFEST: &str = "CMakeLists.txt";

/// Library directory name passed to every configure invocation
pub const INSTALL_LIBDIR: &str = "lib";

/// Environment variable receiving the install prefix for downstream lookups
pub const PREFIX_PATH_VAR: &str = "CMAKE_PREFIX_PATH";

/// Placeholder token for the interpreter executable in raw flags
pub const PYTHON_PLACEHOLDER: &str = "PYTHON_EXECUTABLE";

/// Placeholder token for the install directory in raw flags
pub const INSTALL_DIR_PLACEHOLDER: &str = "INSTALL_DIR";

/// Interpreter looked up on PATH when none is given
pub const DEFAULT_PYTHON: &str = "python3";

/// Default number of parallel jobs passed to the build tool
pub const DEFAULT_BUILD_JOBS: usize = 1;

/// Fixed configure flags the standard strategy appends on top of the
/// per-project flag list and the install prefix/libdir/build-type flags
pub const STANDARD_EXTRA_FLAGS: &[&str] = &[
    "ENFORCE_MINIMAL_CXX_STANDARD=ON",
    "INSTALL_DOCUMENTATION=ON",
    "CMAKE_CXX_FLAGS_RELWITHDEBINFO='-g -O3 -DNDEBUG'",
];

/// Sub-package build order for the `pal_msgs` bundle
pub const PAL_MSGS_PACKAGES: &[&str] = &[
    "pal_interaction_msgs",
    "pal_wifi_localization_msgs",
    "pal_web_msgs",
    "pal_walking_msgs",
    "pal_visual_localization_msgs",
    "pal_vision_msgs",
    "pal_video_recording_msgs",
    "pal_tablet_msgs",
    "pal_simulation_msgs",
    "pal_navigation_msgs",
    "pal_multirobot_msgs",
    "pal_motion_model_msgs",
    "pal_hardware_interfaces",
    "pal_device_msgs",
    "pal_detection_msgs",
    "pal_control_msgs",
    "pal_common_msgs",
    "pal_behaviour_msgs",
];

/// Sub-package build order for the `image_pipeline` bundle
pub const IMAGE_PIPELINE_PACKAGES: &[&str] = &[
    "camera_calibration",
    "depth_image_proc",
    "image_pipeline",
    "image_proc",
    "image_publisher",
    "image_rotate",
    "stereo_image_proc",
];

/// Sub-package build order for the `vision_opencv` bundle
pub const VISION_OPENCV_PACKAGES: &[&str] = &[
    "cv_bridge",
    "image_geometry",
    "vision_opencv",
];
