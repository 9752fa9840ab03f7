//! C/C++ harness: echoes the input and prints the manual-setup placeholder

use crate::harness::MANUAL_SETUP_OUTPUT;

const PRELUDE: &str = "\
#include <algorithm>
#include <climits>
#include <cmath>
#include <fstream>
#include <functional>
#include <iostream>
#include <map>
#include <queue>
#include <set>
#include <sstream>
#include <stack>
#include <string>
#include <unordered_map>
#include <unordered_set>
#include <utility>
#include <vector>

using namespace std;

";

/// Render the C++ harness around `source`
pub fn render(source: &str) -> String {
    format!(
        r#"{PRELUDE}{source}

int main(int argc, char** argv) {{
    if (argc < 2) {{
        std::cerr << "usage: " << argv[0] << " <input-file>" << std::endl;
        return 1;
    }}
    std::ifstream lcrun_file(argv[1]);
    std::stringstream lcrun_buffer;
    lcrun_buffer << lcrun_file.rdbuf();
    std::cout << "Input: " << lcrun_buffer.str() << std::endl;
    std::cout << "Output: {MANUAL_SETUP_OUTPUT}" << std::endl;
    return 0;
}}
"#
    )
}
